//! Card types: arcana, suits, elements, and the card record itself.
//!
//! A standard deck holds 78 cards: 22 major arcana (numbered 0-21) and
//! 56 minor arcana (four suits of ten pip cards plus four court cards).
//! Card records are pure data, constructed once by the deck builder and
//! never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two card classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// The 22 symbolic trump cards.
    Major,
    /// The 56 suited cards.
    Minor,
}

impl Arcana {
    /// Parse an arcana from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            _ => None,
        }
    }
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
        }
    }
}

/// One of the four minor-arcana suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// The suit of inspiration and action.
    Wands,
    /// The suit of emotion and relationships.
    Cups,
    /// The suit of intellect and conflict.
    Swords,
    /// The suit of work and material matters.
    Pentacles,
}

impl Suit {
    /// All suits in their fixed catalog order.
    ///
    /// This order doubles as the tie-break order when interpretation
    /// picks a dominant suit.
    pub fn all() -> &'static [Self] {
        &[Self::Wands, Self::Cups, Self::Swords, Self::Pentacles]
    }

    /// Parse a suit from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wands" => Some(Self::Wands),
            "cups" => Some(Self::Cups),
            "swords" => Some(Self::Swords),
            "pentacles" => Some(Self::Pentacles),
            _ => None,
        }
    }

    /// The element associated with this suit.
    pub fn element(self) -> Element {
        match self {
            Self::Wands => Element::Fire,
            Self::Cups => Element::Water,
            Self::Swords => Element::Air,
            Self::Pentacles => Element::Earth,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wands => write!(f, "wands"),
            Self::Cups => write!(f, "cups"),
            Self::Swords => write!(f, "swords"),
            Self::Pentacles => write!(f, "pentacles"),
        }
    }
}

/// The classical element attributed to a card.
///
/// Minor arcana take their suit's element; each major arcanum carries
/// its own attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Will, energy, and action.
    Fire,
    /// Emotion, intuition, and flow.
    Water,
    /// Thought, language, and clarity.
    Air,
    /// Body, matter, and stability.
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire"),
            Self::Water => write!(f, "Water"),
            Self::Air => write!(f, "Air"),
            Self::Earth => write!(f, "Earth"),
        }
    }
}

/// One tarot card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Stable lowercase identifier, words joined by underscores
    /// (e.g. `three_of_cups`). Unique across the deck.
    pub id: String,
    /// Display name (e.g. "Three of Cups"). Unique across the deck.
    pub name: String,
    /// Whether this is a major or minor arcanum.
    pub arcana: Arcana,
    /// Card number: 0-21 for majors, 1-10 for pip cards, `None` for
    /// court cards.
    pub number: Option<u8>,
    /// The suit, present exactly for minor arcana.
    pub suit: Option<Suit>,
    /// Short descriptors used for search and shown in interpretations.
    pub keywords: Vec<String>,
    /// Meaning when the card lands upright.
    pub upright_meaning: String,
    /// Meaning when the card lands reversed.
    pub reversed_meaning: String,
    /// Imagery and background of the card.
    pub description: String,
    /// Elemental attribution.
    pub element: Element,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcana_parse_variants() {
        assert_eq!(Arcana::parse("major"), Some(Arcana::Major));
        assert_eq!(Arcana::parse("MINOR"), Some(Arcana::Minor));
        assert_eq!(Arcana::parse("  major "), Some(Arcana::Major));
        assert_eq!(Arcana::parse("court"), None);
    }

    #[test]
    fn arcana_display() {
        assert_eq!(Arcana::Major.to_string(), "major");
        assert_eq!(Arcana::Minor.to_string(), "minor");
    }

    #[test]
    fn suit_parse_variants() {
        assert_eq!(Suit::parse("cups"), Some(Suit::Cups));
        assert_eq!(Suit::parse("PENTACLES"), Some(Suit::Pentacles));
        assert_eq!(Suit::parse(" wands "), Some(Suit::Wands));
        assert_eq!(Suit::parse("coins"), None);
    }

    #[test]
    fn suit_order_is_fixed() {
        assert_eq!(
            Suit::all(),
            &[Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles]
        );
    }

    #[test]
    fn suit_elements() {
        assert_eq!(Suit::Wands.element(), Element::Fire);
        assert_eq!(Suit::Cups.element(), Element::Water);
        assert_eq!(Suit::Swords.element(), Element::Air);
        assert_eq!(Suit::Pentacles.element(), Element::Earth);
    }

    #[test]
    fn suit_display() {
        assert_eq!(Suit::Wands.to_string(), "wands");
        assert_eq!(Suit::Pentacles.to_string(), "pentacles");
    }

    #[test]
    fn element_display_is_capitalized() {
        assert_eq!(Element::Fire.to_string(), "Fire");
        assert_eq!(Element::Earth.to_string(), "Earth");
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Arcana::Major).unwrap(), "\"major\"");
        assert_eq!(serde_json::to_string(&Suit::Cups).unwrap(), "\"cups\"");
        // Elements keep their display capitalization in JSON too.
        assert_eq!(serde_json::to_string(&Element::Air).unwrap(), "\"Air\"");
    }

    #[test]
    fn card_serde_roundtrip() {
        let card = Card {
            id: "the_fool".to_string(),
            name: "The Fool".to_string(),
            arcana: Arcana::Major,
            number: Some(0),
            suit: None,
            keywords: vec!["beginnings".to_string()],
            upright_meaning: "A leap of faith".to_string(),
            reversed_meaning: "Hesitation".to_string(),
            description: "A traveler at the cliff's edge".to_string(),
            element: Element::Air,
        };
        let json = serde_json::to_string(&card).unwrap();
        let card2: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card2.id, "the_fool");
        assert_eq!(card2.arcana, Arcana::Major);
        assert_eq!(card2.number, Some(0));
        assert!(card2.suit.is_none());
    }
}
