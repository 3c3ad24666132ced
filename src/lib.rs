//! Client for the PestoAI cryptocurrency market-data API.
//!
//! ```no_run
//! use pestoai::{Params, PestoClient};
//!
//! # async fn run() -> pestoai::Result<()> {
//! let client = PestoClient::new()?;
//! let prices = client
//!     .get_price(vec!["bitcoin", "ethereum"], "usd", Params::new())
//!     .await?;
//! println!("{}", prices);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{toml_config::TomlConfig, ClientConfig};

pub use core::{normalize, Arg, Params, PestoClient, Request};
pub use domain::ports::ConfigProvider;
pub use utils::error::{PestoError, Result};
