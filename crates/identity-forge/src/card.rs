//! Card numbers and the Luhn checksum.
//!
//! Generated numbers are 16 digits long: a network prefix digit, 14 uniform
//! digits, and a Luhn check digit, so every number passes the standard
//! validity check used by payment forms.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::vocabulary::VocabularyTables;

/// Total number of digits in a generated card number.
pub const CARD_DIGITS: usize = 16;

/// Random digits between the prefix and the check digit.
const BODY_DIGITS: usize = CARD_DIGITS - 2;

/// Digits per group in the grouped layout.
const GROUP_SIZE: usize = 4;

const GROUP_SEPARATOR: char = '-';

const DECIMAL_RADIX: u32 = 10;

const DECIMAL_BASE: u8 = 10;

/// Layout used when rendering a card number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardFormat {
    /// Four hyphen-separated groups of four digits.
    #[default]
    Grouped,
    /// Sixteen digits with no separators.
    Compact,
}

impl fmt::Display for CardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grouped => f.write_str("grouped"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

/// Error returned when parsing an unknown [`CardFormat`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card format '{value}' (expected grouped or compact)")]
pub struct ParseCardFormatError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for CardFormat {
    type Err = ParseCardFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grouped" => Ok(Self::Grouped),
            "compact" | "raw" => Ok(Self::Compact),
            _ => Err(ParseCardFormatError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Computes the Luhn check digit for a payload of decimal digits.
///
/// Positions are counted right to left over the full number, with the check
/// digit at position 0. Digits at odd positions are doubled (subtracting 9
/// when the result exceeds 9), everything is summed, and the check digit is
/// `(sum * 9) mod 10`. Returns `None` if any element of `payload` is not a
/// decimal digit.
///
/// # Example
///
/// ```
/// use identity_forge::luhn_check_digit;
///
/// assert_eq!(luhn_check_digit(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1]), Some(3));
/// assert_eq!(luhn_check_digit(&[4, 12]), None);
/// ```
#[must_use]
pub fn luhn_check_digit(payload: &[u8]) -> Option<u8> {
    if payload.iter().any(|digit| *digit >= DECIMAL_BASE) {
        return None;
    }
    let sum = luhn_sum(payload.iter().copied(), true);
    Some((sum * 9).rem_euclid(DECIMAL_BASE))
}

/// Returns `true` if `number` is a Luhn-valid digit string.
///
/// Hyphens and ASCII spaces are ignored. Any other non-digit character, or a
/// string with no digits, is rejected.
///
/// # Example
///
/// ```
/// use identity_forge::is_luhn_valid;
///
/// assert!(is_luhn_valid("4539-1488-0343-6467"));
/// assert!(!is_luhn_valid("4539-1488-0343-6468"));
/// ```
#[must_use]
pub fn is_luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u8>> = number
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR && *c != ' ')
        .map(decimal_digit)
        .collect();

    match digits {
        Some(digits) if !digits.is_empty() => luhn_sum(digits.into_iter(), false) == 0,
        _ => false,
    }
}

/// Generates a Luhn-valid 16-digit card number.
///
/// The first digit comes from the vocabulary's card prefixes.
///
/// # Example
///
/// ```
/// use identity_forge::{CardFormat, VocabularyTables, generate_card_number, is_luhn_valid};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let tables = VocabularyTables::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let card = generate_card_number(&mut rng, &tables, CardFormat::Grouped);
///
/// assert_eq!(card.len(), 19);
/// assert!(is_luhn_valid(&card));
/// ```
pub fn generate_card_number<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    format: CardFormat,
) -> String {
    let prefix = *vocabulary.card_prefixes().pick(rng);

    let mut digits: Vec<u8> = Vec::with_capacity(CARD_DIGITS);
    digits.extend(decimal_digit(prefix));
    digits.extend((0..BODY_DIGITS).map(|_| rng.random_range(0..DECIMAL_BASE)));
    digits.extend(luhn_check_digit(&digits));

    let raw: String = digits
        .iter()
        .filter_map(|digit| char::from_digit(u32::from(*digit), DECIMAL_RADIX))
        .collect();

    match format {
        CardFormat::Compact => raw,
        CardFormat::Grouped => group_digits(&raw),
    }
}

fn group_digits(raw: &str) -> String {
    let mut grouped = String::with_capacity(raw.len() + GROUP_SIZE);
    for (index, digit) in raw.chars().enumerate() {
        if index > 0 && index.rem_euclid(GROUP_SIZE) == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

fn decimal_digit(c: char) -> Option<u8> {
    c.to_digit(DECIMAL_RADIX)
        .and_then(|digit| u8::try_from(digit).ok())
}

/// Luhn sum modulo 10, iterating from the rightmost digit.
///
/// When `double_rightmost` is set the rightmost digit is doubled, which is
/// the layout of a payload still missing its check digit. Digits must be
/// below 10.
fn luhn_sum<I>(digits: I, double_rightmost: bool) -> u8
where
    I: DoubleEndedIterator<Item = u8>,
{
    digits
        .rev()
        .enumerate()
        .map(|(position, digit)| {
            let doubled = (position.rem_euclid(2) == 0) == double_rightmost;
            if doubled {
                let twice = digit * 2;
                if twice > 9 { twice - 9 } else { twice }
            } else {
                digit
            }
        })
        .fold(0, |sum, term| (sum + term).rem_euclid(DECIMAL_BASE))
}
