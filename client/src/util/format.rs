//! Display formatting for amounts and percentages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `1234567` -> `1,234,567 ر.س`.
#[must_use]
pub fn format_sar(amount: u64) -> String {
    format!("{} ر.س", group_thousands(amount))
}

#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Inline style for a progress bar fill.
#[must_use]
pub fn progress_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}
