pub mod ask;
pub mod battlecard;
pub mod blockers;
pub mod funnel;
pub mod overview;
pub mod recommendations;

/// Group thousands with commas: `25000` -> `"25,000"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
