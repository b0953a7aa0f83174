//! Configuration management for the credit search application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables, and defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`date_field`]: Date-of-birth range, display format, and week start
//! - [`lookup`]: Postcode lookup service endpoints and timings
//! - [`auth`]: Lookup API key resolution
//! - [`persistence`]: Config file discovery, reading, and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variables (`CREDITSEARCH_LOOKUP_API_KEY`)
//! 2. Local config (`./creditsearch.json5` or `./creditsearch.json`)
//! 3. User config (`~/.config/creditsearch/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use chrono::Local;
//! use creditsearch_config::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load().await?;
//! let bounds = config.date_of_birth.bounds(Local::now().date_naive())?;
//! println!("accepting {} to {}", bounds.min(), bounds.max());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod date_field;
pub mod error;
pub mod lookup;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use date_field::{DateLimit, DatePickerConfig};
pub use error::{ConfigError, Result};
pub use lookup::LookupConfig;
