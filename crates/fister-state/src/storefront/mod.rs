//! # Storefront Actions
//!
//! The pieces of the storefront UI that touch the store. Rendering and
//! event wiring stay in the browser; what lives here is what those handlers
//! do with the records.
//!
//! - `admin` - Admin panel form submissions
//! - `wallet` - Wallet balance presentation

pub mod admin;
pub mod wallet;

use crate::config::StoreConfig;
use std::time::Duration;

/// Pause between the login action and showing the application view.
pub fn login_delay(config: &StoreConfig) -> Duration {
    Duration::from_millis(config.login_delay_ms)
}
