//! Reproducible generation of fictitious identity records.
//!
//! This crate synthesizes plausible-looking but entirely made-up identities
//! (name, alias, email, phone, address, company and a Luhn-valid card
//! number) for tests, demos and fiction. Nothing is looked up; every field
//! is assembled from small vocabulary tables and simple phonotactic rules.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Validated, immutable vocabulary tables, built in or loaded from JSON
//! - Pronounceable word generation and two leetspeak transforms
//! - Luhn check-digit computation and validation
//! - Configurable alias and card-number policies
//! - Deterministic generation from an injected or seeded random source
//!
//! # Example
//!
//! ```
//! use identity_forge::{IdentityGenerator, VocabularyTables, is_luhn_valid};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let generator = IdentityGenerator::new(VocabularyTables::default());
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(2026);
//! let record = generator.create_identity(&mut rng);
//!
//! let mut replay = ChaCha8Rng::seed_from_u64(2026);
//! assert_eq!(record, generator.create_identity(&mut replay));
//! assert!(is_luhn_valid(&record.credit_card));
//! ```

mod alias;
mod atomic_io;
mod card;
mod contact;
mod error;
pub mod forge_cli;
mod generator;
mod leet;
mod phonetic;
mod record;
mod report;
mod vocabulary;

pub use alias::{AliasStyle, HEX_MARKER, ParseAliasStyleError, generate_alias};
pub use atomic_io::write_atomic;
pub use card::{
    CARD_DIGITS, CardFormat, ParseCardFormatError, generate_card_number, is_luhn_valid,
    luhn_check_digit,
};
pub use contact::{
    EMAIL_SEPARATORS, generate_address, generate_company, generate_email, generate_phone,
};
pub use error::{OutputError, VocabularyError};
pub use generator::{GeneratorPolicy, IdentityGenerator};
pub use leet::{to_email_leetspeak, to_leetspeak};
pub use phonetic::pronounceable_word;
pub use record::IdentityRecord;
pub use report::{REPORT_BANNER, render_report};
pub use vocabulary::{Choices, VocabularySource, VocabularyTables};
