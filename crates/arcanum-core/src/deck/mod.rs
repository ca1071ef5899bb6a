//! The seventy-eight card catalog.
//!
//! [`Deck::standard`] builds the full deck in catalog order: the 22 major
//! arcana by trump number, then each suit ace through king in wands, cups,
//! swords, pentacles order. The deck itself never changes after
//! construction; drawing works on copies of the cards.

mod major;
mod minor;

pub use major::major_arcana;
pub use minor::minor_arcana;

use crate::card::Card;

/// An immutable card catalog.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 78-card deck.
    pub fn standard() -> Self {
        let mut cards = major_arcana();
        cards.extend(minor_arcana());
        Self { cards }
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a single card by name or id.
    ///
    /// The name comparison ignores case; alternatively the query matches
    /// when, lowercased and with whitespace runs collapsed to `_`, it
    /// equals the card id. So `"The Fool"`, `"the fool"`, and `"the_fool"`
    /// all find the same card.
    pub fn card_named(&self, query: &str) -> Option<&Card> {
        let lowered = query.to_lowercase();
        let id_form: String = lowered.split_whitespace().collect::<Vec<_>>().join("_");
        self.cards
            .iter()
            .find(|c| c.name.to_lowercase() == lowered || c.id == id_form)
    }

    /// Find every card whose name, keywords, or description contain the
    /// query, ignoring case.
    ///
    /// Results keep catalog order. An empty query matches the whole deck.
    pub fn search(&self, query: &str) -> Vec<&Card> {
        let needle = query.to_lowercase();
        self.cards
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
                    || c.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
