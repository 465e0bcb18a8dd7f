//! `mow-config` — loads a mowing run from its text configuration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`loader`]  | `MowConfig`, `parse_config`, `load_config_reader`, `load_config_path` |
//! | [`error`]   | `ConfigError`, `ConfigResult<T>`                          |

pub mod error;
pub mod loader;


pub use error::{ConfigError, ConfigResult};
pub use loader::{MowConfig, load_config_path, load_config_reader, parse_config};
