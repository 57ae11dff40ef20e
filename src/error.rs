//! Error type for the fallible edges of the crate.
//!
//! Markup parsing and the countdown never fail; only decoding the host's
//! settings and writing to a terminal can.

use thiserror::Error;

pub type BannerResult<T> = Result<T, BannerError>;

#[derive(Error, Debug)]
pub enum BannerError {
    #[error("Invalid banner settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    #[error("Terminal output failed: {0}")]
    Io(#[from] std::io::Error),
}
