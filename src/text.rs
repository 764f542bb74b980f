use itertools::Itertools;

/// Characters of `s` in reverse order.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

/// First character, by position, whose occurrence count is exactly one.
/// Whitespace is ignored entirely, both as candidates and in the counts.
pub fn first_single_char(s: &str) -> Option<char> {
    let counts = s.chars().filter(|c| !c.is_whitespace()).counts();

    s.chars()
        .filter(|c| !c.is_whitespace())
        .find(|c| counts[c] == 1)
}
