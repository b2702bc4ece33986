//! Property listings and the references stores keep to them.
//!
//! - [`Property`] is the full record owned by the remote API
//! - [`PropertyRef`] is the canonical, minimal form held by the favorites and
//!   compare stores: an id plus a few cached display fields
//! - [`PropertyId`] is the opaque backend identifier both are keyed by

mod id;
mod record;
mod reference;

pub use id::PropertyId;
pub use record::{GeoPoint, Property};
pub use reference::PropertyRef;

/// Format a price for display, grouping thousands with commas.
///
/// Fractional rupees are dropped; listing prices are whole amounts.
///
/// ```
/// use roofline::property::format_price;
///
/// assert_eq!(format_price(4500000.0), "₹ 4,500,000");
/// assert_eq!(format_price(950.0), "₹ 950");
/// ```
pub fn format_price(price: f64) -> String {
    let whole = price.trunc() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("₹ -{}", grouped)
    } else {
        format!("₹ {}", grouped)
    }
}
