//! Cards: the catalog record plus transient battlefield state.
//!
//! A `Card` is deserialized straight from vault-format JSON. Everything in
//! it is immutable catalog data except `combat`, which is skipped by serde
//! and only means something while the card is on a battlefield.
//!
//! ## Identity
//!
//! Copies of the same card share an `id`. Mavericks get their own `id` in
//! the vault, so they are matched by `(expansion, card_number)` instead.

use serde::{Deserialize, Deserializer, Serialize};

/// Read an explicit JSON `null` as the field's default.
///
/// Vault records carry `null` for absent text such as traits or flavor.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The four card types.
///
/// Vault data capitalizes these ("Creature"); lowercase is accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[serde(rename = "Creature", alias = "creature")]
    Creature,
    #[serde(rename = "Action", alias = "action")]
    Action,
    #[serde(rename = "Artifact", alias = "artifact")]
    Artifact,
    #[serde(rename = "Upgrade", alias = "upgrade")]
    Upgrade,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardType::Creature => "creature",
            CardType::Action => "action",
            CardType::Artifact => "artifact",
            CardType::Upgrade => "upgrade",
        };
        f.write_str(name)
    }
}

/// Battlefield-only state of a creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CombatState {
    pub exhausted: bool,
    pub stunned: bool,
    pub power_bonus: i32,
    pub armor_bonus: i32,
}

/// A single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub card_title: String,
    pub house: String,
    pub card_type: CardType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub front_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amber: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub power: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub armor: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flavor_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_number: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expansion: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_maverick: bool,

    #[serde(skip)]
    pub combat: CombatState,
}

impl Card {
    /// Create a card with the identifying fields set and everything else
    /// zeroed. Mostly useful for tests and hand-built decks.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        house: impl Into<String>,
        card_type: CardType,
    ) -> Self {
        Self {
            id: id.into(),
            card_title: title.into(),
            house: house.into(),
            card_type,
            front_image: String::new(),
            card_text: String::new(),
            traits: String::new(),
            amber: 0,
            power: 0,
            armor: 0,
            rarity: String::new(),
            flavor_text: String::new(),
            card_number: 0,
            expansion: 0,
            is_maverick: false,
            combat: CombatState::default(),
        }
    }

    /// Set the amber bonus (builder pattern).
    #[must_use]
    pub fn with_amber(mut self, amber: u32) -> Self {
        self.amber = amber;
        self
    }

    /// Set power and armor (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, power: i32, armor: i32) -> Self {
        self.power = power;
        self.armor = armor;
        self
    }

    /// Set expansion and collector number (builder pattern).
    #[must_use]
    pub fn with_number(mut self, expansion: u32, card_number: u32) -> Self {
        self.expansion = expansion;
        self.card_number = card_number;
        self
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }

    /// Case-insensitive house check.
    #[must_use]
    pub fn is_house(&self, house: &str) -> bool {
        self.house.eq_ignore_ascii_case(house)
    }

    /// Same physical card per vault identity.
    #[must_use]
    pub fn same_id(&self, other: &Card) -> bool {
        self.id == other.id
    }

    /// Power including temporary bonuses.
    #[must_use]
    pub fn current_power(&self) -> i32 {
        self.power + self.combat.power_bonus
    }

    /// Armor including temporary bonuses.
    #[must_use]
    pub fn current_armor(&self) -> i32 {
        self.armor + self.combat.armor_bonus
    }

    /// Stun a creature. No-op on other card types.
    pub fn stun(&mut self) {
        if self.is_creature() {
            self.combat.stunned = true;
        }
    }

    /// Exhaust a creature. No-op on other card types.
    pub fn exhaust(&mut self) {
        if self.is_creature() {
            self.combat.exhausted = true;
        }
    }

    /// Ready a creature.
    ///
    /// A stunned creature only loses the stun; it takes a second ready to
    /// clear exhaustion. No-op on other card types.
    pub fn ready(&mut self) {
        if !self.is_creature() {
            return;
        }
        if self.combat.stunned {
            self.combat.stunned = false;
            return;
        }
        self.combat.exhausted = false;
    }

    /// Drop all battlefield state, e.g. when the card leaves play.
    pub fn reset_combat(&mut self) {
        self.combat = CombatState::default();
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.card_title, self.house)
    }
}
