//! Rendering of recognized digits as a price.

/// Price shown when the server recognized no digits.
pub const EMPTY_PRICE: &str = "$0.00";

/// Render digits as a dollar amount with two decimal places.
///
/// The decimal text of each element is concatenated in order. When more than
/// two characters result, the last two become the cents; otherwise the text
/// is the cents, right-padded with `0`.
///
/// ```
/// use roadsign::currency::format_currency;
///
/// assert_eq!(format_currency(&[]), "$0.00");
/// assert_eq!(format_currency(&[5]), "$0.50");
/// assert_eq!(format_currency(&[1, 2, 3]), "$1.23");
/// ```
pub fn format_currency(digits: &[i64]) -> String {
    if digits.is_empty() {
        return EMPTY_PRICE.to_string();
    }

    let text: String = digits.iter().map(|d| d.to_string()).collect();

    if text.len() > 2 {
        let (dollars, cents) = text.split_at(text.len() - 2);
        format!("${dollars}.{cents}")
    } else {
        format!("$0.{text:0<2}")
    }
}
