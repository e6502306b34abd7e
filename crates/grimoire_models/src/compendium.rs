//! The compendium: items, keys, entries, and source documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::creature::StatBlock;
use crate::error::Error;
use crate::spell_description::ParseableSpellDescription;

/// The kind of a compendium item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompendiumItemType {
    /// A monster statblock.
    Monster,
    /// A player character.
    Character,
    /// A spell.
    Spell,
    /// A named group of items (e.g. an adventuring party).
    Group,
}

impl CompendiumItemType {
    /// The lowercase name used in keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monster => "monster",
            Self::Character => "character",
            Self::Spell => "spell",
            Self::Group => "group",
        }
    }
}

impl FromStr for CompendiumItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monster" => Ok(Self::Monster),
            "character" => Ok(Self::Character),
            "spell" => Ok(Self::Spell),
            "group" => Ok(Self::Group),
            _ => Err(Error::UnknownItemType(s.to_string())),
        }
    }
}

impl fmt::Display for CompendiumItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a compendium realm.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompendiumRealmId(pub String);

impl CompendiumRealmId {
    /// Creates a realm id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A realm: a namespace of compendium content with a shared origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumRealm {
    /// The realm's identifier.
    pub id: CompendiumRealmId,
    /// Display name.
    pub display_name: String,
}

impl CompendiumRealm {
    /// The realm holding the core (SRD) content.
    #[must_use]
    pub fn core() -> Self {
        Self {
            id: CompendiumRealmId::new("core"),
            display_name: "Core".to_string(),
        }
    }

    /// The realm holding homebrew content.
    #[must_use]
    pub fn homebrew() -> Self {
        Self {
            id: CompendiumRealmId::new("homebrew"),
            display_name: "Homebrew".to_string(),
        }
    }
}

/// Identifier of a compendium source document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompendiumSourceDocumentId(pub String);

impl CompendiumSourceDocumentId {
    /// Creates a document id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// A source document: a book or import batch items came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumSourceDocument {
    /// The document's identifier.
    pub id: CompendiumSourceDocumentId,
    /// Display name.
    pub display_name: String,
    /// The realm this document lives in.
    pub realm_id: CompendiumRealmId,
}

/// The key a compendium item is stored under: `type:realm:identifier`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CompendiumItemKey {
    /// The item's type.
    pub item_type: CompendiumItemType,
    /// The realm the item lives in.
    pub realm: CompendiumRealmId,
    /// The identifier within the realm, typically a lowercased title.
    pub identifier: String,
}

impl CompendiumItemKey {
    /// Creates a key.
    pub fn new(
        item_type: CompendiumItemType,
        realm: CompendiumRealmId,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            item_type,
            realm,
            identifier: identifier.into(),
        }
    }

    /// This key moved to another realm.
    #[must_use]
    pub fn in_realm(&self, realm: CompendiumRealmId) -> Self {
        Self {
            item_type: self.item_type,
            realm,
            identifier: self.identifier.clone(),
        }
    }
}

impl fmt::Display for CompendiumItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.item_type, self.realm.0, self.identifier)
    }
}

impl FromStr for CompendiumItemKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(item_type), Some(realm), Some(identifier)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidItemKey(s.to_string()));
        };
        if realm.is_empty() || identifier.is_empty() {
            return Err(Error::InvalidItemKey(s.to_string()));
        }
        Ok(Self {
            item_type: item_type
                .parse()
                .map_err(|_| Error::InvalidItemKey(s.to_string()))?,
            realm: CompendiumRealmId::new(realm),
            identifier: identifier.to_string(),
        })
    }
}

/// A reference from one entity to a compendium item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumItemReference {
    /// The referenced item's title at the time the reference was made.
    pub title: String,
    /// The referenced item's key.
    pub item_key: CompendiumItemKey,
}

/// A monster statblock stored in the compendium.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monster {
    /// The key this monster is stored under.
    pub key: CompendiumItemKey,
    /// The statblock.
    pub stats: StatBlock,
}

/// A player character stored in the compendium.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    /// The key this character is stored under.
    pub key: CompendiumItemKey,
    /// The character's statblock.
    pub stats: StatBlock,
    /// The player's name, when the character belongs to one.
    pub player_name: Option<String>,
}

/// A spell stored in the compendium.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spell {
    /// The key this spell is stored under.
    pub key: CompendiumItemKey,
    /// The spell's name.
    pub name: String,
    /// Spell level; `None` for cantrips.
    pub level: Option<i32>,
    /// Casting time, e.g. "1 action".
    pub casting_time: Option<String>,
    /// Range, e.g. "60 feet".
    pub range: Option<String>,
    /// Duration, e.g. "Instantaneous".
    pub duration: Option<String>,
    /// School of magic.
    pub school: Option<String>,
    /// Whether the spell requires concentration.
    pub concentration: bool,
    /// Whether the spell can be cast as a ritual.
    pub ritual: bool,
    /// The spell's description, with its parsed annotations.
    pub description: ParseableSpellDescription,
    /// Additional effect when cast at a higher level.
    pub higher_level_description: Option<String>,
    /// Classes that can cast the spell.
    pub classes: Vec<String>,
}

/// A named group of compendium items.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumItemGroup {
    /// The key this group is stored under.
    pub key: CompendiumItemKey,
    /// The group's title.
    pub title: String,
    /// The items in the group.
    pub members: Vec<CompendiumItemReference>,
}

/// Any item the compendium can store.
///
/// A closed set: code that needs per-kind behavior pattern-matches instead of
/// downcasting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompendiumItem {
    /// A monster.
    Monster(Monster),
    /// A player character.
    Character(Character),
    /// A spell.
    Spell(Spell),
    /// A group of items.
    Group(CompendiumItemGroup),
}

impl CompendiumItem {
    /// The item's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Monster(monster) => &monster.stats.name,
            Self::Character(character) => &character.stats.name,
            Self::Spell(spell) => &spell.name,
            Self::Group(group) => &group.title,
        }
    }

    /// The key the item is stored under.
    #[must_use]
    pub const fn key(&self) -> &CompendiumItemKey {
        match self {
            Self::Monster(monster) => &monster.key,
            Self::Character(character) => &character.key,
            Self::Spell(spell) => &spell.key,
            Self::Group(group) => &group.key,
        }
    }

    /// Mutable access to the key, for reference migration.
    pub const fn key_mut(&mut self) -> &mut CompendiumItemKey {
        match self {
            Self::Monster(monster) => &mut monster.key,
            Self::Character(character) => &mut character.key,
            Self::Spell(spell) => &mut spell.key,
            Self::Group(group) => &mut group.key,
        }
    }
}

/// Where a compendium entry came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompendiumEntryOrigin {
    /// Created in the app, possibly derived from another item.
    Created(Option<CompendiumItemReference>),
    /// Imported by a job.
    Imported(Option<String>),
}

/// The document metadata recorded on an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumEntryDocument {
    /// The source document's id.
    pub id: CompendiumSourceDocumentId,
    /// The source document's display name at the time of storage.
    pub display_name: String,
}

/// An item as stored in the compendium, with its provenance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumEntry {
    /// The stored item.
    pub item: CompendiumItem,
    /// Where the entry came from.
    pub origin: CompendiumEntryOrigin,
    /// The source document the entry belongs to.
    pub document: CompendiumEntryDocument,
}

/// A compendium import job: one batch of items read from an external source.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompendiumImportJob {
    /// Identifier of the external source, e.g. a reader name.
    pub source: String,
    /// The document the imported items were filed under.
    pub document_id: CompendiumSourceDocumentId,
}
