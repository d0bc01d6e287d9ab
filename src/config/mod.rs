// src/config/mod.rs

//! Configuration: an optional TOML defaults file plus the command line,
//! merged into [`Settings`].

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{
    ConfigFile, DisplaySection, FormatSection, RawConfigFile, StatusSection, TimerSection,
};
pub use settings::Settings;
