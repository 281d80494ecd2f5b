//! Display Helpers
//!
//! Price, rating and star formatting used by the item cards and cart.

/// Currency suffix printed after prices
pub const CURRENCY_LABEL: &str = "تومان";

/// Number of stars in the rating widget
pub const MAX_STARS: u8 = 5;

/// Group thousands with commas: `150000` -> `150,000`
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Price followed by the currency label
pub fn format_price_label(amount: u64) -> String {
    format!("{} {}", format_price(amount), CURRENCY_LABEL)
}

/// One decimal place: `4.8`, `4.0`
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}

/// Whole stars to fill for a rating
pub fn filled_stars(rating: f32) -> u8 {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as u8).min(MAX_STARS)
}
