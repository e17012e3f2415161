//! Configuration management

mod action_file;
mod settings;

pub use action_file::{load_action, save_action};
pub use settings::{AppConfig, WindowConfig};
