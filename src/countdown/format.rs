/// Formats `value` with `separator` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len.saturating_add(len / 3));
    for (idx, ch) in digits.chars().enumerate() {
        let remaining = len.saturating_sub(idx);
        if idx > 0 && remaining % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
