/// State management module
///
/// This module handles all application state, including:
/// - Navigation state and its transitions (navigation.rs)
/// - Shared data structures (data.rs)
/// - Zone dataset loading and lookup (dataset.rs)
/// - Satellite image store enumeration (catalog.rs)

pub mod catalog;
pub mod data;
pub mod dataset;
pub mod navigation;
