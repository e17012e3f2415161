//! action-editor-types: Shared data types for the automation action editor.
//!
//! This crate contains pure data types (action configs, duration values,
//! template detection) that are shared across all action-editor crates.
//! These types have no GTK dependencies, making them suitable as a
//! foundation layer.

pub mod action;
pub mod duration;
pub mod template;

// Re-export commonly used types at the crate root for convenience
pub use action::{ActionConfig, DelayValue};
pub use duration::{create_duration_data, DurationData};
pub use template::{has_template, is_template};
