//! Pronounceable word generation.
//!
//! Words alternate strictly between consonants and vowels, starting on
//! either at random, and are capitalised. They stand in for every proper
//! noun the generator needs: names, streets, cities and company stems.

use rand::Rng;

use crate::vocabulary::VocabularyTables;

/// Generates a capitalised pronounceable word of exactly `length` letters.
///
/// A length of zero yields an empty string.
///
/// # Example
///
/// ```
/// use identity_forge::{VocabularyTables, pronounceable_word};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let tables = VocabularyTables::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let word = pronounceable_word(&mut rng, &tables, 6);
///
/// assert_eq!(word.chars().count(), 6);
/// assert!(word.starts_with(|c: char| c.is_ascii_uppercase()));
/// ```
pub fn pronounceable_word<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    length: usize,
) -> String {
    let mut on_consonant = rng.random_bool(0.5);
    let mut word = String::with_capacity(length);

    for position in 0..length {
        let letter = if on_consonant {
            *vocabulary.consonants().pick(rng)
        } else {
            *vocabulary.vowels().pick(rng)
        };
        if position == 0 {
            word.push(letter.to_ascii_uppercase());
        } else {
            word.push(letter);
        }
        on_consonant = !on_consonant;
    }

    word
}

/// Draws a length from `range` and generates a word of that length.
pub(crate) fn word_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    range: std::ops::RangeInclusive<usize>,
) -> String {
    let length = rng.random_range(range);
    pronounceable_word(rng, vocabulary, length)
}
