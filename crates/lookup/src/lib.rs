//! Postcode address lookup for the credit search application.
//!
//! This crate talks to the address lookup service: it exchanges an API key
//! for a short-lived bearer token, caches the token in memory, and searches
//! addresses by postcode. Results are turned into select options for the
//! address line field.
//!
//! # Overview
//!
//! - [`client`]: The [`LookupClient`] HTTP client
//! - [`token`]: In-memory bearer token cache
//! - [`address`]: Address records and option formatting
//! - [`error`]: Error types for lookup operations
//!
//! # Examples
//!
//! ```no_run
//! use creditsearch_config::LookupConfig;
//! use creditsearch_lookup::{LookupClient, format_address_options};
//!
//! # async fn example() -> creditsearch_lookup::Result<()> {
//! let mut client = LookupClient::new(&LookupConfig::default())?;
//! let options = format_address_options(&client.lookup("SW1A 2AA").await);
//! println!("{} options", options.len());
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod client;
pub mod error;
pub mod token;

pub use address::{Address, AddressOption, NO_RESULTS, SELECT_PLACEHOLDER, format_address_options};
pub use client::LookupClient;
pub use error::{Error, Result};
pub use token::TokenCache;
