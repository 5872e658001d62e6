//! Persisted workflow state: the config file and the merge-conflict marker.

pub mod config;
pub mod marker;

pub use config::{WorkflowConfig, CONFIG_FILE};
