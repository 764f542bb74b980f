/// Mathematical interval notation for two endpoints and their inclusion
/// flags. The smaller endpoint always comes first, whatever the argument
/// order.
pub fn format_interval(a: f64, b: f64, start_included: bool, end_included: bool) -> String {
    let lo = a.min(b);
    let hi = a.max(b);

    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };

    format!("{}{}, {}{}", open, lo, hi, close)
}
