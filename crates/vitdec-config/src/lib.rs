//! VitDec configuration management
//!
//! This crate provides configuration loading and parsing for the decoder:
//! - TOML configuration file parsing
//! - Decoder option and trellis description structures

pub mod config_err;
pub mod decoder_config;
pub mod toml_config;

pub use config_err::ConfigErr;
pub use decoder_config::*;
pub use toml_config::*;
