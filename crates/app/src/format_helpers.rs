//! Shared formatting utilities for the dashboard views.

/// Format a verified in-ground value as "$1.4 trillion".
///
/// Whole amounts print without a decimal point ("$850 billion").
pub fn format_verified_amount(amount: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("${}", amount)
    } else {
        format!("${} {}", amount, unit)
    }
}
