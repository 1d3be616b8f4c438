// Utility functions

/// Order page for a used vehicle.
pub fn order_link(vin: &str) -> String {
    format!("https://www.tesla.com/m3/order/{}?titleStatus=USED", vin)
}

/// Formats a monthly payment keeping one decimal on whole amounts (`150.0`, `174.99`).
pub fn format_payment(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

/// Escapes text for use inside HTML element content and single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
