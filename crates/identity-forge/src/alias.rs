//! Alias (handle) generation.
//!
//! An alias is a stylised handle built from a prefix and a leetspeak word.
//! [`AliasStyle`] selects the composition policy; every style is a pure
//! function of the random source, so a seeded RNG always yields the same
//! alias.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::leet::to_leetspeak;
use crate::phonetic::word_in_range;
use crate::vocabulary::VocabularyTables;

/// Marker placed in front of hex-style aliases.
pub const HEX_MARKER: &str = "0x";

/// Separators that may join an emoticon tag to its word.
const TAG_SEPARATORS: [&str; 4] = ["", "_", ".", "-"];

const ALIAS_WORD_LENGTH: std::ops::RangeInclusive<usize> = 4..=7;

/// Composition policy for generated aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasStyle {
    /// Even odds between [`AliasStyle::Hex`] and [`AliasStyle::Emoticon`].
    #[default]
    Mixed,
    /// `0x` followed by a leetspeak word, e.g. `0xV4|0R`.
    Hex,
    /// A single emoticon from the pool, e.g. `(>_<)`.
    Emoticon,
    /// An emoticon, an optional separator, then a leetspeak word.
    Tagged,
}

impl fmt::Display for AliasStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mixed => "mixed",
            Self::Hex => "hex",
            Self::Emoticon => "emoticon",
            Self::Tagged => "tagged",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown [`AliasStyle`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alias style '{value}' (expected mixed, hex, emoticon or tagged)")]
pub struct ParseAliasStyleError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for AliasStyle {
    type Err = ParseAliasStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "hex" => Ok(Self::Hex),
            "emoticon" => Ok(Self::Emoticon),
            "tagged" => Ok(Self::Tagged),
            _ => Err(ParseAliasStyleError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Generates an alias according to `style`.
///
/// # Example
///
/// ```
/// use identity_forge::{AliasStyle, VocabularyTables, generate_alias};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let tables = VocabularyTables::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let alias = generate_alias(&mut rng, &tables, AliasStyle::Hex);
///
/// assert!(alias.starts_with("0x"));
/// ```
pub fn generate_alias<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &VocabularyTables,
    style: AliasStyle,
) -> String {
    match style {
        AliasStyle::Mixed => {
            let resolved = if rng.random_bool(0.5) {
                AliasStyle::Hex
            } else {
                AliasStyle::Emoticon
            };
            generate_alias(rng, vocabulary, resolved)
        }
        AliasStyle::Hex => format!("{HEX_MARKER}{}", leet_word(rng, vocabulary)),
        AliasStyle::Emoticon => vocabulary.emoticons().pick(rng).clone(),
        AliasStyle::Tagged => {
            let tag = vocabulary.emoticons().pick(rng);
            let separator = TAG_SEPARATORS
                .get(rng.random_range(0..TAG_SEPARATORS.len()))
                .copied()
                .unwrap_or_default();
            format!("{tag}{separator}{}", leet_word(rng, vocabulary))
        }
    }
}

fn leet_word<R: Rng + ?Sized>(rng: &mut R, vocabulary: &VocabularyTables) -> String {
    let word = word_in_range(rng, vocabulary, ALIAS_WORD_LENGTH);
    to_leetspeak(rng, vocabulary, &word)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn tables() -> VocabularyTables {
        VocabularyTables::default()
    }

    fn is_emoticon(tables: &VocabularyTables, alias: &str) -> bool {
        tables.emoticons().iter().any(|emoticon| emoticon == alias)
    }

    #[rstest]
    fn hex_aliases_carry_marker_and_word(tables: VocabularyTables) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            let alias = generate_alias(&mut rng, &tables, AliasStyle::Hex);
            let word = alias.strip_prefix(HEX_MARKER).expect("hex marker");
            assert!(word.chars().count() >= 4, "{alias}");
        }
    }

    #[rstest]
    fn emoticon_aliases_come_from_the_pool(tables: VocabularyTables) {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..100 {
            let alias = generate_alias(&mut rng, &tables, AliasStyle::Emoticon);
            assert!(is_emoticon(&tables, &alias), "{alias}");
        }
    }

    #[rstest]
    fn tagged_aliases_start_with_an_emoticon(tables: VocabularyTables) {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let alias = generate_alias(&mut rng, &tables, AliasStyle::Tagged);
            assert!(
                tables
                    .emoticons()
                    .iter()
                    .any(|emoticon| alias.starts_with(emoticon.as_str())
                        && alias.len() > emoticon.len()),
                "{alias}"
            );
        }
    }

    #[rstest]
    fn mixed_aliases_use_both_styles(tables: VocabularyTables) {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let aliases: Vec<String> = (0..100)
            .map(|_| generate_alias(&mut rng, &tables, AliasStyle::Mixed))
            .collect();

        assert!(aliases.iter().any(|alias| alias.starts_with(HEX_MARKER)));
        assert!(aliases.iter().any(|alias| is_emoticon(&tables, alias)));
    }

    #[rstest]
    #[case(AliasStyle::Mixed)]
    #[case(AliasStyle::Hex)]
    #[case(AliasStyle::Emoticon)]
    #[case(AliasStyle::Tagged)]
    fn aliases_are_reproducible(tables: VocabularyTables, #[case] style: AliasStyle) {
        let mut first = ChaCha8Rng::seed_from_u64(55);
        let mut second = ChaCha8Rng::seed_from_u64(55);
        assert_eq!(
            generate_alias(&mut first, &tables, style),
            generate_alias(&mut second, &tables, style)
        );
    }

    #[rstest]
    #[case("mixed", AliasStyle::Mixed)]
    #[case("HEX", AliasStyle::Hex)]
    #[case(" emoticon ", AliasStyle::Emoticon)]
    #[case("tagged", AliasStyle::Tagged)]
    fn parses_alias_styles(#[case] input: &str, #[case] expected: AliasStyle) {
        assert_eq!(input.parse::<AliasStyle>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_alias_style() {
        assert_eq!(
            "kaomoji".parse::<AliasStyle>(),
            Err(ParseAliasStyleError {
                value: "kaomoji".to_owned()
            })
        );
    }
}
