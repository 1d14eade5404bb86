//! Leetspeak transforms.
//!
//! Two flavours exist. [`to_leetspeak`] draws from the full substitution
//! table (symbols and multi-character clusters included) and is used for
//! aliases. [`to_email_leetspeak`] only swaps letters for single ASCII
//! alphanumerics so the result stays valid inside an email local part.

use rand::Rng;

use crate::vocabulary::VocabularyTables;

/// Chance, out of [`EMAIL_LEET_DENOMINATOR`], that an email-safe letter is
/// converted.
const EMAIL_LEET_NUMERATOR: u32 = 4;

const EMAIL_LEET_DENOMINATOR: u32 = 5;

/// Rewrites `text` with randomly chosen visual variants.
///
/// The text is lowercased first. Characters with an entry in the
/// substitution table are replaced by one of their variants; all others pass
/// through, randomly upper- or lower-cased. Repeated calls on the same input
/// give different results.
///
/// # Example
///
/// ```
/// use identity_forge::{VocabularyTables, to_leetspeak};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let tables = VocabularyTables::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let styled = to_leetspeak(&mut rng, &tables, "Shadow");
///
/// assert!(!styled.is_empty());
/// ```
pub fn to_leetspeak<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    text: &str,
) -> String {
    let mut styled = String::with_capacity(text.len() * 2);

    for letter in text.to_lowercase().chars() {
        if let Some(variants) = vocabulary.leet_variants(letter) {
            styled.push_str(variants.pick(rng));
        } else if rng.random_bool(0.5) {
            styled.extend(letter.to_uppercase());
        } else {
            styled.push(letter);
        }
    }

    styled
}

/// Rewrites `text` with email-safe substitutions only.
///
/// The text is lowercased first. Each character with an email-safe
/// replacement is converted four times out of five and kept otherwise, so
/// usernames stay readable. Every other character passes through unchanged.
///
/// # Example
///
/// ```
/// use identity_forge::{VocabularyTables, to_email_leetspeak};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let tables = VocabularyTables::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let user = to_email_leetspeak(&mut rng, &tables, "Kira_Tosa");
///
/// assert!(user.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
/// ```
pub fn to_email_leetspeak<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    text: &str,
) -> String {
    text.to_lowercase()
        .chars()
        .map(|letter| match vocabulary.email_substitute(letter) {
            Some(replacement)
                if rng.random_ratio(EMAIL_LEET_NUMERATOR, EMAIL_LEET_DENOMINATOR) =>
            {
                replacement
            }
            _ => letter,
        })
        .collect()
}
