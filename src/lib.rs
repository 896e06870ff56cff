pub mod asset;
pub mod config;
pub mod error;

pub use config::{EventKey, GreetingConfig};
pub use error::{Error, Result};
