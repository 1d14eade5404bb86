//! Behavioural tests for identity generation.
//!
//! These tests validate reproducibility, field invariants and vocabulary
//! validation against Gherkin scenarios.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use identity_forge::{
    AliasStyle, GeneratorPolicy, HEX_MARKER, IdentityGenerator, IdentityRecord, VocabularyError,
    VocabularySource, VocabularyTables, is_luhn_valid,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

/// Vocabulary document with every table filled.
const VOCABULARY_JSON: &str = r#"{
    "version": 1,
    "consonants": "bdklmnprst",
    "vowels": "aeiou",
    "leet": {"a": ["4", "@"], "e": ["3"]},
    "emailLeet": {"a": "4", "e": "3"},
    "emoticons": ["(^_^)", ":-)"],
    "streetTypes": ["St", "Ave"],
    "companySuffixes": ["Inc"],
    "emailDomains": ["example.org"],
    "cardPrefixes": "45"
}"#;

/// Test world holding vocabulary, policy and generated records.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    vocabulary_result: Slot<Result<VocabularyTables, VocabularyError>>,
    policy: Slot<GeneratorPolicy>,
    seed: Slot<u64>,
    records: Slot<Vec<IdentityRecord>>,
    second_records: Slot<Vec<IdentityRecord>>,
}

impl World {
    fn generator(&self) -> IdentityGenerator {
        let vocabulary = self
            .vocabulary_result
            .get()
            .expect("vocabulary should be set")
            .expect("vocabulary should be valid");
        let policy = self.policy.get().unwrap_or_default();
        IdentityGenerator::with_policy(vocabulary, policy)
    }

    fn seed(&self) -> u64 {
        self.seed.get().expect("seed should be set")
    }

    fn records(&self) -> Vec<IdentityRecord> {
        self.records.get().expect("records should be generated")
    }

    fn vocabulary_result(&self) -> Result<VocabularyTables, VocabularyError> {
        self.vocabulary_result
            .get()
            .expect("vocabulary result should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the built-in vocabulary")]
fn the_built_in_vocabulary(world: &World) {
    world.vocabulary_result.set(Ok(VocabularyTables::default()));
}

#[given("a vocabulary with the single domain {domain}")]
fn a_vocabulary_with_the_single_domain(world: &World, domain: String) {
    let source = VocabularySource {
        email_domains: vec![domain],
        ..VocabularySource::default()
    };
    world
        .vocabulary_result
        .set(VocabularyTables::try_from_source(source));
}

#[given("the hex alias style")]
fn the_hex_alias_style(world: &World) {
    world.policy.set(GeneratorPolicy {
        alias_style: AliasStyle::Hex,
        ..GeneratorPolicy::default()
    });
}

#[given("a generation seed of {seed:u64}")]
fn a_generation_seed_of(world: &World, seed: u64) {
    world.seed.set(seed);
}

#[given("vocabulary JSON with no vowels")]
fn vocabulary_json_with_no_vowels(world: &World) {
    let json = VOCABULARY_JSON.replace(r#""vowels": "aeiou""#, r#""vowels": """#);
    world.json_input.set(json);
}

#[given("vocabulary JSON with version {version:u32}")]
fn vocabulary_json_with_version(world: &World, version: u32) {
    let json = VOCABULARY_JSON.replace(r#""version": 1"#, &format!(r#""version": {version}"#));
    world.json_input.set(json);
}

// ============================================================================
// When steps
// ============================================================================

#[when("{count:usize} identities are generated")]
fn identities_are_generated(world: &World, count: usize) {
    let records = world.generator().generate_batch(world.seed(), count);
    world.records.set(records);
}

#[when("{count:usize} identities are generated twice")]
fn identities_are_generated_twice(world: &World, count: usize) {
    let generator = world.generator();
    let seed = world.seed();

    world.records.set(generator.generate_batch(seed, count));
    world
        .second_records
        .set(generator.generate_batch(seed, count));
}

#[when("the vocabulary is parsed")]
fn the_vocabulary_is_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world
        .vocabulary_result
        .set(VocabularyTables::from_json(&json));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("both batches are identical")]
fn both_batches_are_identical(world: &World) {
    let second = world
        .second_records
        .get()
        .expect("second batch should be set");

    assert_eq!(world.records(), second, "generation should be deterministic");
}

#[then("every card number is Luhn valid")]
fn every_card_number_is_luhn_valid(world: &World) {
    for record in world.records() {
        assert!(
            is_luhn_valid(&record.credit_card),
            "invalid card: {}",
            record.credit_card
        );
    }
}

#[then("every email uses a configured domain")]
fn every_email_uses_a_configured_domain(world: &World) {
    let domains: Vec<String> = world
        .generator()
        .vocabulary()
        .email_domains()
        .iter()
        .map(|domain| format!("@{domain}"))
        .collect();
    for record in world.records() {
        assert!(
            domains.iter().any(|domain| record.email.ends_with(domain.as_str())),
            "unexpected email: {}",
            record.email
        );
    }
}

#[then("every alias starts with the hex marker")]
fn every_alias_starts_with_the_hex_marker(world: &World) {
    for record in world.records() {
        assert!(
            record.alias.starts_with(HEX_MARKER),
            "unexpected alias: {}",
            record.alias
        );
    }
}

#[then("parsing fails with an empty vowels table error")]
fn parsing_fails_with_an_empty_vowels_table_error(world: &World) {
    match world.vocabulary_result() {
        Err(VocabularyError::EmptyTable { table: "vowels" }) => {}
        other => panic!("Expected EmptyTable for vowels, got: {other:?}"),
    }
}

#[then("parsing fails with an unsupported version error")]
fn parsing_fails_with_an_unsupported_version_error(world: &World) {
    match world.vocabulary_result() {
        Err(VocabularyError::UnsupportedVersion { .. }) => {}
        other => panic!("Expected UnsupportedVersion, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/identity.feature",
    name = "Seeded generation is reproducible"
)]
fn seeded_generation_is_reproducible(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity.feature",
    name = "Generated card numbers pass the Luhn check"
)]
fn generated_card_numbers_pass_the_luhn_check(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity.feature",
    name = "Emails use a configured domain"
)]
fn emails_use_a_configured_domain(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity.feature",
    name = "Hex aliases carry the hex marker"
)]
fn hex_aliases_carry_the_hex_marker(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity.feature",
    name = "Vocabulary with an empty vowel table is rejected"
)]
fn vocabulary_with_an_empty_vowel_table_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identity.feature",
    name = "Vocabulary with an unsupported version is rejected"
)]
fn vocabulary_with_an_unsupported_version_is_rejected(world: World) {
    let _ = world;
}
