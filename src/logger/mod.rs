pub mod category_card;
pub mod insights_card;
pub mod request_card;

use terminal_size::{terminal_size, Width};

/// Horizontal rule sized to the terminal, clamped for very wide windows.
pub(crate) fn rule(ch: char) -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(60)
        .min(72);
    ch.to_string().repeat(width)
}

pub(crate) fn fmt_amount(amount: Option<f64>) -> String {
    match amount {
        Some(a) => format!("₹{:.2}", a),
        None => "₹0.00".to_string(),
    }
}

pub(crate) fn fmt_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}
