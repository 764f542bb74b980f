/// Luhn checksum validity for an identification number.
///
/// Walking from the rightmost digit, every second digit is doubled;
/// two-digit products are folded to their digit sum before totalling.
/// The number is valid iff the total is divisible by 10.
pub fn is_valid(number: u64) -> bool {
    let mut rest = number;
    let mut total = 0;
    let mut double = false;

    loop {
        let mut digit = rest % 10;
        if double {
            digit *= 2;
            // Folding the two digits of 10..=18 is the same as subtracting 9.
            if digit > 9 {
                digit -= 9;
            }
        }

        total += digit;
        rest /= 10;
        double = !double;

        if rest == 0 {
            break;
        }
    }

    total % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid(79927398713));
        assert!(is_valid(4012888888881881));
        assert!(is_valid(5123456789012346));
        assert!(is_valid(378282246310005));
        assert!(is_valid(371449635398431));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid(4571234567890111));
        assert!(!is_valid(5436468789016589));
        assert!(!is_valid(4916123456789012));
    }

    #[test]
    fn test_single_digit() {
        // A lone check digit is valid only when it is zero.
        assert!(is_valid(0));
        assert!(!is_valid(5));
    }

    #[test]
    fn test_neighbouring_numbers_differ() {
        // Changing the check digit of a valid number invalidates it.
        assert!(is_valid(79927398713));
        assert!(!is_valid(79927398714));
        assert!(!is_valid(79927398712));
    }
}
