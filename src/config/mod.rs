//! Config module — project-level settings from `.passop.toml`.

pub mod settings;

pub use settings::Settings;
