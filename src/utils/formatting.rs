//! Formatting utilities used for CLI and export outputs.

/// Hours with two decimals, e.g. `1680.00`, optionally signed (`+12.50`).
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    if want_sign && hours > 0.0 {
        format!("+{:.2}", hours)
    } else {
        format!("{:.2}", hours)
    }
}

/// Parse `#rrggbb` into its channels.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim().strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Convert a `#rrggbb` colour to a 24-bit ANSI foreground sequence.
/// Falls back to no colour when the value is not a hex triplet.
pub fn ansi_from_hex(hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        None => String::new(),
    }
}
