//! Card entities.
//!
//! `Card` is the fully-populated, immutable value produced by the generator
//! and stored in decks. `CardCandidate` is the same record with every field
//! optional, used for data of unknown quality (imports, stored documents).
//!
//! Both serialize to the same camelCase JSON shape:
//! `id, name, cost, attack, health, icon, color, unitColor, highlightColor,
//! type` plus optional `hasTaunt`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::archetype::Archetype;

/// Caller-supplied unique card identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A generated playable unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,

    /// Archetype key.
    #[serde(rename = "type")]
    pub card_type: String,

    pub name: String,
    pub cost: u8,
    pub attack: u32,
    pub health: u32,

    #[serde(default)]
    pub has_taunt: bool,

    pub icon: String,
    pub color: String,
    pub unit_color: String,
    pub highlight_color: String,
}

impl Card {
    /// Build a card carrying a copy of the archetype's visual fields.
    #[must_use]
    pub fn from_archetype(
        id: CardId,
        archetype: &Archetype,
        name: impl Into<String>,
        cost: u8,
        attack: u32,
        health: u32,
        has_taunt: bool,
    ) -> Self {
        Self {
            id,
            card_type: archetype.key.clone(),
            name: name.into(),
            cost,
            attack,
            health,
            has_taunt,
            icon: archetype.icon.clone(),
            color: archetype.color.clone(),
            unit_color: archetype.unit_color.clone(),
            highlight_color: archetype.highlight_color.clone(),
        }
    }

    /// Sum of attack and health.
    #[must_use]
    pub fn total_stats(&self) -> u32 {
        self.attack.saturating_add(self.health)
    }

    /// Copy of this card labelled with another archetype key.
    #[must_use]
    pub fn relabelled(&self, archetype_key: &str) -> Self {
        Self {
            card_type: archetype_key.to_string(),
            ..self.clone()
        }
    }
}

/// Required card field, used to report incomplete cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardField {
    Id,
    Name,
    Cost,
    Attack,
    Health,
    Icon,
    Color,
    UnitColor,
    HighlightColor,
    Type,
}

impl CardField {
    /// Every field a card must carry, in schema order.
    pub const REQUIRED: [CardField; 10] = [
        CardField::Id,
        CardField::Name,
        CardField::Cost,
        CardField::Attack,
        CardField::Health,
        CardField::Icon,
        CardField::Color,
        CardField::UnitColor,
        CardField::HighlightColor,
        CardField::Type,
    ];

    /// JSON field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardField::Id => "id",
            CardField::Name => "name",
            CardField::Cost => "cost",
            CardField::Attack => "attack",
            CardField::Health => "health",
            CardField::Icon => "icon",
            CardField::Color => "color",
            CardField::UnitColor => "unitColor",
            CardField::HighlightColor => "highlightColor",
            CardField::Type => "type",
        }
    }
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic for one incomplete card in a deck.
///
/// A null card reports every required field as missing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefect {
    /// Position of the card in the deck.
    pub index: usize,
    /// Fields that were absent.
    pub missing: SmallVec<[CardField; 4]>,
}

impl CardDefect {
    #[must_use]
    pub fn new(index: usize, missing: impl IntoIterator<Item = CardField>) -> Self {
        Self {
            index,
            missing: missing.into_iter().collect(),
        }
    }

    /// Defect for a card slot holding nothing.
    #[must_use]
    pub fn null_card(index: usize) -> Self {
        Self::new(index, CardField::REQUIRED)
    }

    #[must_use]
    pub fn is_missing(&self, field: CardField) -> bool {
        self.missing.contains(&field)
    }
}

impl std::fmt::Display for CardDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.missing.iter().map(|m| m.as_str()).collect();
        write!(f, "card {} missing [{}]", self.index, fields.join(", "))
    }
}

/// A card record whose fields may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCandidate {
    #[serde(default)]
    pub id: Option<CardId>,
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cost: Option<u8>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub health: Option<u32>,
    #[serde(default)]
    pub has_taunt: Option<bool>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub unit_color: Option<String>,
    #[serde(default)]
    pub highlight_color: Option<String>,
}

impl CardCandidate {
    /// Required fields that are absent, in schema order.
    #[must_use]
    pub fn missing_fields(&self) -> SmallVec<[CardField; 4]> {
        CardField::REQUIRED
            .into_iter()
            .filter(|&field| !self.has(field))
            .collect()
    }

    fn has(&self, field: CardField) -> bool {
        match field {
            CardField::Id => self.id.is_some(),
            CardField::Name => self.name.is_some(),
            CardField::Cost => self.cost.is_some(),
            CardField::Attack => self.attack.is_some(),
            CardField::Health => self.health.is_some(),
            CardField::Icon => self.icon.is_some(),
            CardField::Color => self.color.is_some(),
            CardField::UnitColor => self.unit_color.is_some(),
            CardField::HighlightColor => self.highlight_color.is_some(),
            CardField::Type => self.card_type.is_some(),
        }
    }

    /// Convert into a `Card`, or report which fields are missing.
    pub fn into_card(self) -> Result<Card, SmallVec<[CardField; 4]>> {
        let missing = self.missing_fields();
        match self {
            CardCandidate {
                id: Some(id),
                card_type: Some(card_type),
                name: Some(name),
                cost: Some(cost),
                attack: Some(attack),
                health: Some(health),
                has_taunt,
                icon: Some(icon),
                color: Some(color),
                unit_color: Some(unit_color),
                highlight_color: Some(highlight_color),
            } => Ok(Card {
                id,
                card_type,
                name,
                cost,
                attack,
                health,
                has_taunt: has_taunt.unwrap_or(false),
                icon,
                color,
                unit_color,
                highlight_color,
            }),
            _ => Err(missing),
        }
    }
}

impl From<Card> for CardCandidate {
    fn from(card: Card) -> Self {
        Self {
            id: Some(card.id),
            card_type: Some(card.card_type),
            name: Some(card.name),
            cost: Some(card.cost),
            attack: Some(card.attack),
            health: Some(card.health),
            has_taunt: Some(card.has_taunt),
            icon: Some(card.icon),
            color: Some(card.color),
            unit_color: Some(card.unit_color),
            highlight_color: Some(card.highlight_color),
        }
    }
}
