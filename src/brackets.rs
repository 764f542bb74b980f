use crate::error::KataError;

const PAIRS: [(char, char); 4] = [('[', ']'), ('(', ')'), ('{', '}'), ('<', '>')];

fn is_opening(c: char) -> bool {
    PAIRS.iter().any(|&(open, _)| open == c)
}

fn opening_for(close: char) -> Option<char> {
    PAIRS
        .iter()
        .find(|&&(_, c)| c == close)
        .map(|&(open, _)| open)
}

/// Whether every bracket in `s` is closed in last-in-first-out order.
///
/// The alphabet is the four bracket kinds plus whitespace; any other
/// character is an invalid-character error, reported before balance is
/// judged. The empty string is balanced, and a closing bracket with no
/// matching opener on top of the stack makes the input unbalanced.
pub fn is_balanced(s: &str) -> Result<bool, KataError> {
    if let Some((position, found)) = s
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace() && !is_opening(c) && opening_for(c).is_none())
    {
        return Err(KataError::InvalidCharacter { found, position });
    }

    let mut stack = Vec::new();
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        if is_opening(c) {
            stack.push(c);
        } else if stack.pop() != opening_for(c) {
            return Ok(false);
        }
    }

    Ok(stack.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_empty_string_is_balanced() {
        assert_eq!(is_balanced(""), Ok(true));
    }

    #[test]
    fn test_single_pairs() {
        assert_eq!(is_balanced("[]"), Ok(true));
        assert_eq!(is_balanced("{}"), Ok(true));
        assert_eq!(is_balanced("()"), Ok(true));
        assert_eq!(is_balanced("<>"), Ok(true));
    }

    #[test]
    fn test_nested_mixed_kinds() {
        assert_eq!(is_balanced("{[(<{[]}>)]}"), Ok(true));
        assert_eq!(is_balanced("[[][][[]]]"), Ok(true));
    }

    #[test]
    fn test_unclosed_opener() {
        assert_eq!(is_balanced("[[]"), Ok(false));
        assert_eq!(is_balanced("[[][]]["), Ok(false));
    }

    #[test]
    fn test_leading_closer() {
        assert_eq!(is_balanced("]["), Ok(false));
        assert_eq!(is_balanced(")"), Ok(false));
    }

    #[test]
    fn test_mismatched_kinds() {
        assert_eq!(is_balanced("{)"), Ok(false));
        assert_eq!(is_balanced("[<]>"), Ok(false));
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(is_balanced("[ ( ) ]\n{\t}"), Ok(true));
    }

    #[test]
    fn test_foreign_character_is_an_error() {
        assert_matches!(
            is_balanced("[a]"),
            Err(KataError::InvalidCharacter { found: 'a', position: 1 })
        );
    }

    #[test]
    fn test_error_wins_over_imbalance() {
        // The scan for foreign characters runs before balance is judged.
        assert_matches!(is_balanced("]]x"), Err(KataError::InvalidCharacter { found: 'x', .. }));
    }
}
