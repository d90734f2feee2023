//! Wallet presentation.

use crate::domain::records::UserRecord;

/// Currency symbol shown in front of amounts.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount with two decimals, e.g. `₹100.00`.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Text for the storefront's balance display.
pub fn balance_display(user: &UserRecord) -> String {
    format_amount(user.balance)
}
