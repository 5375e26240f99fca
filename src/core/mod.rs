pub(crate) mod logger;

pub mod config;
pub mod default_configuration;
pub mod error;


pub use self::error::Result;
