//! Identity record assembly.
//!
//! [`IdentityGenerator`] owns the validated vocabulary and the style policy
//! and composes the field generators into one [`IdentityRecord`]. The random
//! source is always passed in by the caller, so the same seed reproduces the
//! same records.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use uuid::{Builder, Uuid};

use crate::alias::{AliasStyle, generate_alias};
use crate::card::{CardFormat, generate_card_number};
use crate::contact::{generate_address, generate_company, generate_email, generate_phone};
use crate::phonetic::word_in_range;
use crate::record::IdentityRecord;
use crate::vocabulary::VocabularyTables;

const FIRST_NAME_LENGTH: RangeInclusive<usize> = 4..=7;
const LAST_NAME_LENGTH: RangeInclusive<usize> = 5..=8;
const INTERNAL_ID: RangeInclusive<u32> = 1..=99_999;

/// Style choices applied when assembling records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorPolicy {
    /// How aliases are composed.
    pub alias_style: AliasStyle,
    /// How card numbers are rendered.
    pub card_format: CardFormat,
    /// Whether email usernames go through the email-safe leetspeak transform.
    pub email_leetspeak: bool,
}

impl Default for GeneratorPolicy {
    fn default() -> Self {
        Self {
            alias_style: AliasStyle::default(),
            card_format: CardFormat::default(),
            email_leetspeak: true,
        }
    }
}

/// Stateless generator of fictitious identities.
///
/// # Example
///
/// ```
/// use identity_forge::{IdentityGenerator, VocabularyTables, is_luhn_valid};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let generator = IdentityGenerator::new(VocabularyTables::default());
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let record = generator.create_identity(&mut rng);
///
/// assert!(is_luhn_valid(&record.credit_card));
/// assert_eq!(record.email.matches('@').count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityGenerator {
    vocabulary: VocabularyTables,
    policy: GeneratorPolicy,
}

impl IdentityGenerator {
    /// Creates a generator using the default [`GeneratorPolicy`].
    #[must_use]
    pub fn new(vocabulary: VocabularyTables) -> Self {
        Self::with_policy(vocabulary, GeneratorPolicy::default())
    }

    /// Creates a generator with an explicit policy.
    #[must_use]
    pub const fn with_policy(vocabulary: VocabularyTables, policy: GeneratorPolicy) -> Self {
        Self { vocabulary, policy }
    }

    /// Returns the vocabulary tables.
    #[must_use]
    pub const fn vocabulary(&self) -> &VocabularyTables {
        &self.vocabulary
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> GeneratorPolicy {
        self.policy
    }

    /// Generates one identity record from `rng`.
    ///
    /// Fields are drawn in a fixed order (names, alias, internal id, UUID,
    /// email, phone, address, company, card), so identically seeded sources
    /// yield identical records.
    pub fn create_identity<R: Rng + ?Sized>(&self, rng: &mut R) -> IdentityRecord {
        let first_name = word_in_range(rng, &self.vocabulary, FIRST_NAME_LENGTH);
        let last_name = word_in_range(rng, &self.vocabulary, LAST_NAME_LENGTH);
        let alias = generate_alias(rng, &self.vocabulary, self.policy.alias_style);
        let internal_id = rng.random_range(INTERNAL_ID);
        let uuid = random_uuid(rng);
        let email = generate_email(
            rng,
            &self.vocabulary,
            &first_name,
            &last_name,
            self.policy.email_leetspeak,
        );
        let phone = generate_phone(rng);
        let address = generate_address(rng, &self.vocabulary);
        let company = generate_company(rng, &self.vocabulary);
        let credit_card = generate_card_number(rng, &self.vocabulary, self.policy.card_format);

        IdentityRecord {
            internal_id,
            uuid,
            alias,
            real_name: format!("{first_name} {last_name}"),
            email,
            phone,
            address,
            company,
            credit_card,
        }
    }

    /// Generates `count` records from a `ChaCha8Rng` seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::IdentityGenerator;
    ///
    /// let generator = IdentityGenerator::default();
    /// let first = generator.generate_batch(2026, 3);
    /// let second = generator.generate_batch(2026, 3);
    ///
    /// assert_eq!(first.len(), 3);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn generate_batch(&self, seed: u64, count: usize) -> Vec<IdentityRecord> {
        debug!(
            seed,
            count,
            alias_style = %self.policy.alias_style,
            card_format = %self.policy.card_format,
            "generating identity batch"
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count).map(|_| self.create_identity(&mut rng)).collect()
    }
}

/// Draws a UUID with version-4 layout from `rng`.
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}
