//! Engine configuration
//!
//! Heuristic thresholds live in [`EngineConfig`]; [`load_config`] reads them
//! from a TOML or YAML file, falling back to defaults.

pub mod engine;
pub mod loader;

pub use engine::EngineConfig;
pub use loader::load_config;
