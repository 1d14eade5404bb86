//! Contact-field generators: phone, address, company and email.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::leet::to_email_leetspeak;
use crate::phonetic::word_in_range;
use crate::vocabulary::VocabularyTables;

const COUNTRY_CODE: RangeInclusive<u32> = 1..=99;
const EXCHANGE: RangeInclusive<u32> = 100..=999;
const SUBSCRIBER: RangeInclusive<u32> = 1000..=9999;

const HOUSE_NUMBER: RangeInclusive<u32> = 10..=9999;
const STREET_NAME_LENGTH: RangeInclusive<usize> = 5..=8;
const CITY_NAME_LENGTH: RangeInclusive<usize> = 4..=9;
const ZIP_CODE: RangeInclusive<u32> = 10000..=99999;

const COMPANY_NAME_LENGTH: RangeInclusive<usize> = 4..=8;

/// Separators placed between first and last name in an email username.
pub const EMAIL_SEPARATORS: [&str; 4] = [".", "_", "-", ""];

const EMAIL_NUMBER_SUFFIX: RangeInclusive<u32> = 1..=99;

/// Generates a phone number such as `+44-512-907-3310`.
pub fn generate_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let country_code = rng.random_range(COUNTRY_CODE);
    let area = rng.random_range(EXCHANGE);
    let exchange = rng.random_range(EXCHANGE);
    let subscriber = rng.random_range(SUBSCRIBER);
    format!("+{country_code}-{area}-{exchange}-{subscriber}")
}

/// Generates a one-line street address.
///
/// The layout is `{house} {Street} {Type}, {Town} City, {zip}`.
pub fn generate_address<R: Rng + ?Sized>(rng: &mut R, vocabulary: &VocabularyTables) -> String {
    let house_number = rng.random_range(HOUSE_NUMBER);
    let street_name = word_in_range(rng, vocabulary, STREET_NAME_LENGTH);
    let street_type = vocabulary.street_types().pick(rng);
    let city_name = word_in_range(rng, vocabulary, CITY_NAME_LENGTH);
    let zip_code = rng.random_range(ZIP_CODE);
    format!("{house_number} {street_name} {street_type}, {city_name} City, {zip_code}")
}

/// Generates a company name: a pronounceable word and a corporate suffix.
pub fn generate_company<R: Rng + ?Sized>(rng: &mut R, vocabulary: &VocabularyTables) -> String {
    let name = word_in_range(rng, vocabulary, COMPANY_NAME_LENGTH);
    let suffix = vocabulary.company_suffixes().pick(rng);
    format!("{name} {suffix}")
}

/// Generates an email address derived from a first and last name.
///
/// The names are lowercased and joined with one of [`EMAIL_SEPARATORS`].
/// When `leetspeak` is set the username goes through the email-safe
/// leetspeak transform. Half of the addresses get a numeric suffix.
///
/// # Example
///
/// ```
/// use identity_forge::{VocabularyTables, generate_email};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let tables = VocabularyTables::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let email = generate_email(&mut rng, &tables, "Kira", "Tosavu", false);
///
/// let (user, domain) = email.split_once('@').expect("has @");
/// assert!(user.starts_with("kira"));
/// assert!(tables.email_domains().iter().any(|known| known == domain));
/// ```
pub fn generate_email<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    first_name: &str,
    last_name: &str,
    leetspeak: bool,
) -> String {
    let separator = EMAIL_SEPARATORS
        .get(rng.random_range(0..EMAIL_SEPARATORS.len()))
        .copied()
        .unwrap_or_default();
    let base = format!("{first_name}{separator}{last_name}").to_lowercase();

    let mut user = if leetspeak {
        to_email_leetspeak(rng, vocabulary, &base)
    } else {
        base
    };
    if rng.random_bool(0.5) {
        user.push_str(&rng.random_range(EMAIL_NUMBER_SUFFIX).to_string());
    }

    let domain = vocabulary.email_domains().pick(rng);
    format!("{user}@{domain}")
}
