//! Vocabulary tables and JSON loading.
//!
//! This module defines the immutable tables every generator draws from:
//! phoneme sets, leetspeak substitutions, the emoticon pool, and the suffix
//! and domain lists. Tables are validated once when they are built, so the
//! generators never have to handle an empty pool or a malformed entry.

use std::collections::BTreeMap;
use std::iter;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::error::VocabularyError;

/// Current supported vocabulary document version.
const SUPPORTED_VERSION: u32 = 1;

const DEFAULT_CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'y', 'z',
];

const DEFAULT_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

const DEFAULT_LEET: &[(char, &[&str])] = &[
    ('a', &["4", "@", "a", "A"]),
    ('b', &["b", "B"]),
    ('c', &["<", "c", "C"]),
    ('d', &["d", "D"]),
    ('e', &["3", "e", "E"]),
    ('g', &["9", "g", "G"]),
    ('h', &["4", "h", "H"]),
    ('i', &["1", "!", "|", "i", "I"]),
    ('k', &["k", "K"]),
    ('l', &["1", "|", "l", "L"]),
    ('m', &["^^", "m", "M"]),
    ('n', &["n", "N"]),
    ('o', &["0", "*", "o", "O"]),
    ('p', &["p", "P"]),
    ('s', &["5", "$", "s", "S"]),
    ('t', &["7", "+", "t", "T"]),
    ('u', &["u", "U"]),
    ('v', &["v", "V"]),
    ('w', &["vv", "w", "W"]),
    ('x', &["x", "X"]),
    ('z', &["z", "Z"]),
];

const DEFAULT_EMAIL_LEET: [(char, char); 10] = [
    ('a', '4'),
    ('b', '8'),
    ('e', '3'),
    ('g', '9'),
    ('i', '1'),
    ('l', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
    ('z', '2'),
];

const DEFAULT_EMOTICONS: [&str; 43] = [
    "(o_O)",
    ">_<",
    "x_x",
    ":)",
    "^.~",
    "-_-",
    "T_T",
    "=.=",
    "d-_-b",
    "(^_^)",
    "o.0",
    "<3",
    ":P",
    ":D",
    ":(",
    ";)",
    "¯\\_(ツ)_/¯",
    "(>.<)",
    "(*_*)",
    "ಠ_ಠ",
    "(¬_¬)",
    "(='.'=)",
    "\\(•◡•)/",
    "[+_+]",
    "(;´༎ຶД༎ຶ`)",
    "( ͡° ͜ʖ ͡°)",
    "ʕ•ᴥ•ʔ",
    "(▀̿Ĺ̯▀̿ ̿)",
    "༼ つ ◕_◕ ༽つ",
    "(ง'̀-'́)ง",
    "(kts)",
    "{._.}",
    "^o^",
    "(X_X)",
    "/|\\( ;,;)/|\\",
    "(~_~;)",
    "(*^*)",
    "(T_T)",
    "(=_=)",
    "(?_?)",
    "('_')",
    "(>_>)",
    "(<_<)",
];

const DEFAULT_STREET_TYPES: [&str; 6] = ["St", "Ave", "Ln", "Rd", "Blvd", "Way"];

const DEFAULT_COMPANY_SUFFIXES: [&str; 6] = ["Corp", "Inc", "Systems", "Solutions", "Labs", "Group"];

const DEFAULT_EMAIL_DOMAINS: [&str; 6] = [
    "proton.me",
    "mail.onion",
    "tutanota.com",
    "secmail.net",
    "darkbox.cc",
    "gmail.com",
];

const DEFAULT_CARD_PREFIXES: [char; 2] = ['4', '5'];

/// A non-empty pool of values to draw from.
///
/// The first entry is stored apart from the rest so that picking an element
/// is total: there is always something to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> Choices<T> {
    /// Builds a pool from a list of values.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::EmptyTable`] naming `table` when `items` is
    /// empty.
    pub fn try_new(items: Vec<T>, table: &'static str) -> Result<Self, VocabularyError> {
        let mut values = items.into_iter();
        let head = values.next().ok_or(VocabularyError::EmptyTable { table })?;
        Ok(Self {
            head,
            tail: values.collect(),
        })
    }

    /// Picks one value uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let index = rng.random_range(0..self.count());
        index
            .checked_sub(1)
            .and_then(|tail_index| self.tail.get(tail_index))
            .unwrap_or(&self.head)
    }

    /// Returns the number of values in the pool (always at least one).
    #[must_use]
    pub fn count(&self) -> usize {
        self.tail.len() + 1
    }

    /// Iterates over the pool in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    /// Returns `true` if `value` is part of the pool.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }
}

impl Choices<String> {
    fn from_static(head: &str, tail: &[&str]) -> Self {
        Self {
            head: head.to_owned(),
            tail: tail.iter().map(|value| (*value).to_owned()).collect(),
        }
    }
}

/// Unvalidated vocabulary tables, as supplied by a caller or a JSON file.
///
/// Convert into [`VocabularyTables`] with [`VocabularyTables::try_from_source`]
/// to validate the contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularySource {
    /// Letters treated as consonants.
    pub consonants: Vec<char>,
    /// Letters treated as vowels.
    pub vowels: Vec<char>,
    /// Visual variants for each lowercase character.
    pub leet: BTreeMap<char, Vec<String>>,
    /// Single alphanumeric replacements that are safe in an email local part.
    pub email_leet: BTreeMap<char, char>,
    /// Emoticon and kaomoji pool used for aliases.
    pub emoticons: Vec<String>,
    /// Street-type suffixes such as `St` or `Ave`.
    pub street_types: Vec<String>,
    /// Corporate suffixes such as `Inc` or `Labs`.
    pub company_suffixes: Vec<String>,
    /// Domains used for generated email addresses.
    pub email_domains: Vec<String>,
    /// Leading digits for card numbers.
    pub card_prefixes: Vec<char>,
}

impl Default for VocabularySource {
    fn default() -> Self {
        Self {
            consonants: DEFAULT_CONSONANTS.to_vec(),
            vowels: DEFAULT_VOWELS.to_vec(),
            leet: default_leet(),
            email_leet: DEFAULT_EMAIL_LEET.into_iter().collect(),
            emoticons: owned(&DEFAULT_EMOTICONS),
            street_types: owned(&DEFAULT_STREET_TYPES),
            company_suffixes: owned(&DEFAULT_COMPANY_SUFFIXES),
            email_domains: owned(&DEFAULT_EMAIL_DOMAINS),
            card_prefixes: DEFAULT_CARD_PREFIXES.to_vec(),
        }
    }
}

/// Validated, immutable vocabulary tables.
///
/// Build once and share by reference; nothing mutates the tables after
/// construction.
///
/// # Example
///
/// ```
/// use identity_forge::{VocabularySource, VocabularyTables};
///
/// let mut source = VocabularySource::default();
/// source.email_domains = vec!["example.test".to_owned()];
///
/// let tables = VocabularyTables::try_from_source(source).expect("valid tables");
/// assert_eq!(tables.email_domains().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyTables {
    consonants: Choices<char>,
    vowels: Choices<char>,
    leet: BTreeMap<char, Choices<String>>,
    email_leet: BTreeMap<char, char>,
    emoticons: Choices<String>,
    street_types: Choices<String>,
    company_suffixes: Choices<String>,
    email_domains: Choices<String>,
    card_prefixes: Choices<char>,
}

impl Default for VocabularyTables {
    fn default() -> Self {
        let [consonant, consonants @ ..] = DEFAULT_CONSONANTS;
        let [vowel, vowels @ ..] = DEFAULT_VOWELS;
        let [emoticon, emoticons @ ..] = DEFAULT_EMOTICONS;
        let [street_type, street_types @ ..] = DEFAULT_STREET_TYPES;
        let [company_suffix, company_suffixes @ ..] = DEFAULT_COMPANY_SUFFIXES;
        let [email_domain, email_domains @ ..] = DEFAULT_EMAIL_DOMAINS;
        let [card_prefix, card_prefixes @ ..] = DEFAULT_CARD_PREFIXES;

        Self {
            consonants: Choices {
                head: consonant,
                tail: consonants.to_vec(),
            },
            vowels: Choices {
                head: vowel,
                tail: vowels.to_vec(),
            },
            leet: default_leet()
                .into_iter()
                .filter_map(|(key, variants)| {
                    Choices::try_new(variants, "leet")
                        .ok()
                        .map(|choices| (key, choices))
                })
                .collect(),
            email_leet: DEFAULT_EMAIL_LEET.into_iter().collect(),
            emoticons: Choices::from_static(emoticon, &emoticons),
            street_types: Choices::from_static(street_type, &street_types),
            company_suffixes: Choices::from_static(company_suffix, &company_suffixes),
            email_domains: Choices::from_static(email_domain, &email_domains),
            card_prefixes: Choices {
                head: card_prefix,
                tail: card_prefixes.to_vec(),
            },
        }
    }
}

impl VocabularyTables {
    /// Validates a [`VocabularySource`] and freezes it into tables.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if:
    /// - Any pool (phonemes, emoticons, suffixes, domains, prefixes) is empty
    /// - A phoneme is not a lowercase ASCII letter, or a letter is both a
    ///   consonant and a vowel
    /// - A leet key is not lowercase, or has no variants or an empty variant
    /// - An email-safe replacement is not ASCII alphanumeric
    /// - A text entry is blank, or a domain contains `@` or whitespace
    /// - A card prefix is not a decimal digit
    pub fn try_from_source(source: VocabularySource) -> Result<Self, VocabularyError> {
        validate_phonemes(&source.consonants, "consonants")?;
        validate_phonemes(&source.vowels, "vowels")?;
        if let Some(letter) = source
            .consonants
            .iter()
            .find(|letter| source.vowels.contains(letter))
        {
            return Err(VocabularyError::OverlappingPhonemes { letter: *letter });
        }

        let leet = source
            .leet
            .into_iter()
            .map(|(key, variants)| validate_leet_entry(key, variants))
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        for (key, replacement) in &source.email_leet {
            ensure_lowercase_key(*key, "emailLeet")?;
            if !replacement.is_ascii_alphanumeric() {
                return Err(VocabularyError::InvalidEntry {
                    table: "emailLeet",
                    value: replacement.to_string(),
                    reason: "replacements must be ASCII letters or digits",
                });
            }
        }

        validate_text_entries(&source.emoticons, "emoticons")?;
        validate_text_entries(&source.street_types, "streetTypes")?;
        validate_text_entries(&source.company_suffixes, "companySuffixes")?;
        validate_text_entries(&source.email_domains, "emailDomains")?;
        if let Some(domain) = source
            .email_domains
            .iter()
            .find(|domain| domain.contains('@') || domain.contains(char::is_whitespace))
        {
            return Err(VocabularyError::InvalidEntry {
                table: "emailDomains",
                value: domain.clone(),
                reason: "domains must not contain '@' or whitespace",
            });
        }

        if let Some(prefix) = source
            .card_prefixes
            .iter()
            .find(|prefix| !prefix.is_ascii_digit())
        {
            return Err(VocabularyError::InvalidEntry {
                table: "cardPrefixes",
                value: prefix.to_string(),
                reason: "card prefixes must be decimal digits",
            });
        }

        Ok(Self {
            consonants: Choices::try_new(source.consonants, "consonants")?,
            vowels: Choices::try_new(source.vowels, "vowels")?,
            leet,
            email_leet: source.email_leet,
            emoticons: Choices::try_new(source.emoticons, "emoticons")?,
            street_types: Choices::try_new(source.street_types, "streetTypes")?,
            company_suffixes: Choices::try_new(source.company_suffixes, "companySuffixes")?,
            email_domains: Choices::try_new(source.email_domains, "emailDomains")?,
            card_prefixes: Choices::try_new(source.card_prefixes, "cardPrefixes")?,
        })
    }

    /// Parses and validates vocabulary tables from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if the JSON is malformed, a table is
    /// missing, the version is unsupported, or validation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use identity_forge::VocabularyTables;
    ///
    /// let json = r#"{
    ///     "version": 1,
    ///     "consonants": "bdkt",
    ///     "vowels": "ao",
    ///     "leet": {"a": ["4"]},
    ///     "emailLeet": {"o": "0"},
    ///     "emoticons": [":)"],
    ///     "streetTypes": ["St"],
    ///     "companySuffixes": ["Ltd"],
    ///     "emailDomains": ["example.test"],
    ///     "cardPrefixes": "4"
    /// }"#;
    ///
    /// let tables = VocabularyTables::from_json(json).expect("valid tables");
    /// assert!(tables.is_vowel('o'));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let raw: RawVocabulary =
            serde_json::from_str(json).map_err(|e| VocabularyError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(VocabularyError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::try_from_source(raw.into_source())
    }

    /// Loads vocabulary tables from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError`] if the file cannot be read or its contents
    /// are rejected by [`VocabularyTables::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let io_error = |message: String| VocabularyError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("vocabulary path must be a file".to_owned()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;

        let tables = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            emoticons = tables.emoticons.count(),
            domains = tables.email_domains.count(),
            "loaded vocabulary tables"
        );
        Ok(tables)
    }

    /// Returns the consonant set.
    #[must_use]
    pub const fn consonants(&self) -> &Choices<char> {
        &self.consonants
    }

    /// Returns the vowel set.
    #[must_use]
    pub const fn vowels(&self) -> &Choices<char> {
        &self.vowels
    }

    /// Returns `true` if `letter` (case-insensitive) is a configured consonant.
    #[must_use]
    pub fn is_consonant(&self, letter: char) -> bool {
        self.consonants.contains(&letter.to_ascii_lowercase())
    }

    /// Returns `true` if `letter` (case-insensitive) is a configured vowel.
    #[must_use]
    pub fn is_vowel(&self, letter: char) -> bool {
        self.vowels.contains(&letter.to_ascii_lowercase())
    }

    /// Returns the visual variants for a lowercase character, if any.
    #[must_use]
    pub fn leet_variants(&self, letter: char) -> Option<&Choices<String>> {
        self.leet.get(&letter)
    }

    /// Returns the email-safe replacement for a lowercase character, if any.
    #[must_use]
    pub fn email_substitute(&self, letter: char) -> Option<char> {
        self.email_leet.get(&letter).copied()
    }

    /// Returns the emoticon pool.
    #[must_use]
    pub const fn emoticons(&self) -> &Choices<String> {
        &self.emoticons
    }

    /// Returns the street-type suffixes.
    #[must_use]
    pub const fn street_types(&self) -> &Choices<String> {
        &self.street_types
    }

    /// Returns the corporate suffixes.
    #[must_use]
    pub const fn company_suffixes(&self) -> &Choices<String> {
        &self.company_suffixes
    }

    /// Returns the email domains.
    #[must_use]
    pub const fn email_domains(&self) -> &Choices<String> {
        &self.email_domains
    }

    /// Returns the card-network prefix digits.
    #[must_use]
    pub const fn card_prefixes(&self) -> &Choices<char> {
        &self.card_prefixes
    }
}

fn default_leet() -> BTreeMap<char, Vec<String>> {
    DEFAULT_LEET
        .iter()
        .map(|(key, variants)| (*key, owned(variants)))
        .collect()
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn validate_phonemes(letters: &[char], table: &'static str) -> Result<(), VocabularyError> {
    if letters.is_empty() {
        return Err(VocabularyError::EmptyTable { table });
    }
    match letters.iter().find(|letter| !letter.is_ascii_lowercase()) {
        Some(letter) => Err(VocabularyError::InvalidEntry {
            table,
            value: letter.to_string(),
            reason: "phonemes must be lowercase ASCII letters",
        }),
        None => Ok(()),
    }
}

fn validate_leet_entry(
    key: char,
    variants: Vec<String>,
) -> Result<(char, Choices<String>), VocabularyError> {
    ensure_lowercase_key(key, "leet")?;
    if variants.iter().any(String::is_empty) {
        return Err(VocabularyError::InvalidEntry {
            table: "leet",
            value: key.to_string(),
            reason: "variants must not be empty strings",
        });
    }
    let choices = Choices::try_new(variants, "leet").map_err(|_| VocabularyError::InvalidEntry {
        table: "leet",
        value: key.to_string(),
        reason: "substitutions need at least one variant",
    })?;
    Ok((key, choices))
}

fn ensure_lowercase_key(key: char, table: &'static str) -> Result<(), VocabularyError> {
    if key.is_uppercase() {
        return Err(VocabularyError::InvalidEntry {
            table,
            value: key.to_string(),
            reason: "keys must be lowercase",
        });
    }
    Ok(())
}

fn validate_text_entries(values: &[String], table: &'static str) -> Result<(), VocabularyError> {
    if values.is_empty() {
        return Err(VocabularyError::EmptyTable { table });
    }
    match values.iter().find(|value| value.trim().is_empty()) {
        Some(value) => Err(VocabularyError::InvalidEntry {
            table,
            value: value.clone(),
            reason: "entries must not be blank",
        }),
        None => Ok(()),
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVocabulary {
    version: u32,
    consonants: String,
    vowels: String,
    leet: BTreeMap<char, Vec<String>>,
    email_leet: BTreeMap<char, char>,
    emoticons: Vec<String>,
    street_types: Vec<String>,
    company_suffixes: Vec<String>,
    email_domains: Vec<String>,
    card_prefixes: String,
}

impl RawVocabulary {
    fn into_source(self) -> VocabularySource {
        VocabularySource {
            consonants: self.consonants.chars().collect(),
            vowels: self.vowels.chars().collect(),
            leet: self.leet,
            email_leet: self.email_leet,
            emoticons: self.emoticons,
            street_types: self.street_types,
            company_suffixes: self.company_suffixes,
            email_domains: self.email_domains,
            card_prefixes: self.card_prefixes.chars().collect(),
        }
    }
}
