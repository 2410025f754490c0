pub mod config;
pub mod filter;
pub mod hierarchy;
pub mod store;

pub use config::HierarchyConfig;
pub use hierarchy::HierarchyEngine;
