use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Classification of an integer under the FizzBuzz rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FizzBuzz {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(i64),
}

/// Classify `n`. Multiples of both three and five take precedence over
/// the single-divisor cases.
pub fn classify(n: i64) -> FizzBuzz {
    if n % 3 == 0 && n % 5 == 0 {
        return FizzBuzz::FizzBuzz;
    }

    if n % 5 == 0 {
        return FizzBuzz::Buzz;
    }

    if n % 3 == 0 {
        return FizzBuzz::Fizz;
    }

    FizzBuzz::Number(n)
}

/// Classifications for every integer in `range`, in order.
pub fn sequence(range: RangeInclusive<i64>) -> impl Iterator<Item = FizzBuzz> {
    range.map(classify)
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Fizz => write!(f, "Fizz"),
            FizzBuzz::Buzz => write!(f, "Buzz"),
            FizzBuzz::FizzBuzz => write!(f, "FizzBuzz"),
            FizzBuzz::Number(n) => write!(f, "{}", n),
        }
    }
}
