//! The versioned domain parsers and their registry.
//!
//! Each parser couples a grammar to a version string. The version is carried
//! by the instance, not a global, so tests can construct a parser with any
//! version they need. Bump a version constant whenever the grammar's
//! recognition rules change in a way that could alter cached results.

use grimoire_dice::DiceExpressionParser;
use grimoire_foundation::{DomainParser, Located};

use crate::annotation::TextAnnotation;
use crate::creature::{CreatureAction, CreatureFeature};
use crate::creature_action::{CreatureActionParser, ParsedCreatureAction};
use crate::creature_feature::{CreatureFeatureParser, ParsedCreatureFeature};
use crate::spell_description::ParsedSpellDescription;

/// Parses creature actions: limited use from the name, the weapon attack
/// shape from the description, and dice annotations over the description.
#[derive(Clone, Debug)]
pub struct CreatureActionDomainParser {
    version: String,
}

impl CreatureActionDomainParser {
    /// The current grammar version.
    pub const VERSION: &'static str = "1";

    /// Creates the parser at the current version.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(Self::VERSION)
    }

    /// Creates the parser with a custom version, for tests and migrations.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for CreatureActionDomainParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainParser for CreatureActionDomainParser {
    type Input = CreatureAction;
    type Output = ParsedCreatureAction;

    fn name(&self) -> &str {
        "CreatureActionDomainParser"
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn parse(&self, input: &CreatureAction) -> Option<ParsedCreatureAction> {
        ParsedCreatureAction::from_parts(
            CreatureFeatureParser::limited_use_in_name().run(&input.name.to_lowercase()),
            CreatureActionParser::parse(&input.description),
            dice_annotations(&input.description),
        )
    }
}

/// Parses creature features: limited use from the name, a spellcasting
/// block when the name announces one, and dice annotations.
#[derive(Clone, Debug)]
pub struct CreatureFeatureDomainParser {
    version: String,
}

impl CreatureFeatureDomainParser {
    /// The current grammar version.
    pub const VERSION: &'static str = "2";

    /// Creates the parser at the current version.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(Self::VERSION)
    }

    /// Creates the parser with a custom version, for tests and migrations.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for CreatureFeatureDomainParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainParser for CreatureFeatureDomainParser {
    type Input = CreatureFeature;
    type Output = ParsedCreatureFeature;

    fn name(&self) -> &str {
        "CreatureFeatureDomainParser"
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn parse(&self, input: &CreatureFeature) -> Option<ParsedCreatureFeature> {
        let name = input.name.to_lowercase();

        let spellcasting = if name.contains("spellcasting") {
            CreatureFeatureParser::spellcasting()
                .run(&input.description.to_lowercase())
                .map(|mut spellcasting| {
                    spellcasting.innate = name.contains("innate");
                    spellcasting
                })
        } else {
            None
        };

        Some(ParsedCreatureFeature {
            limited_use: CreatureFeatureParser::limited_use_in_name().run(&name),
            spellcasting,
            other_description_annotations: dice_annotations(&input.description),
        })
    }
}

/// Parses spell descriptions: dice annotations over the text.
#[derive(Clone, Debug)]
pub struct SpellDescriptionDomainParser {
    version: String,
}

impl SpellDescriptionDomainParser {
    /// The current grammar version.
    pub const VERSION: &'static str = "1";

    /// Creates the parser at the current version.
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(Self::VERSION)
    }

    /// Creates the parser with a custom version, for tests and migrations.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for SpellDescriptionDomainParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainParser for SpellDescriptionDomainParser {
    type Input = String;
    type Output = ParsedSpellDescription;

    fn name(&self) -> &str {
        "SpellDescriptionDomainParser"
    }

    fn version(&self) -> &str {
        &self.version
    }

    /// Always produces a result, even an empty one, so a description with no
    /// dice in it is not re-scanned on every access.
    fn parse(&self, input: &String) -> Option<ParsedSpellDescription> {
        Some(ParsedSpellDescription {
            annotations: dice_annotations(input),
        })
    }
}

/// Every dice expression in the text, as annotations.
fn dice_annotations(text: &str) -> Vec<Located<TextAnnotation>> {
    DiceExpressionParser::matches_in(text)
        .into_iter()
        .map(|located| located.map(TextAnnotation::DiceExpression))
        .collect()
}

/// The registry of domain parsers the parse cache runs on.
///
/// Constructed explicitly and passed to whoever parses, rather than living
/// in process-wide statics. The combined version doubles as the persisted
/// data compatibility token: when it differs from the one stored with the
/// data, a bulk re-parse pass over all stored entities is warranted.
#[derive(Clone, Debug, Default)]
pub struct DomainParsers {
    /// The creature action parser.
    pub creature_action: CreatureActionDomainParser,
    /// The creature feature parser.
    pub creature_feature: CreatureFeatureDomainParser,
    /// The spell description parser.
    pub spell_description: SpellDescriptionDomainParser,
}

impl DomainParsers {
    /// Creates the registry with every parser at its current version.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One token combining every grammar's name and version.
    #[must_use]
    pub fn combined_version(&self) -> String {
        [
            format!(
                "{}:{}",
                self.creature_action.name(),
                self.creature_action.version()
            ),
            format!(
                "{}:{}",
                self.creature_feature.name(),
                self.creature_feature.version()
            ),
            format!(
                "{}:{}",
                self.spell_description.name(),
                self.spell_description.version()
            ),
        ]
        .join("|")
    }
}
