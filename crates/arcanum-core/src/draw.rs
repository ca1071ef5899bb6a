//! The draw engine.
//!
//! Drawing shuffles a copy of the whole deck, takes cards off the top, and
//! flips a coin for each card's orientation. All randomness flows through
//! the caller's generator, so a seeded generator replays a draw exactly.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::Deck;

/// One card taken from a shuffled deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnCard {
    /// The card that was drawn.
    pub card: Card,
    /// Label for the slot this card fills. Free draws carry the generic
    /// "Position N"; the reading assembler overwrites it with the spread's
    /// position name.
    pub position: String,
    /// Whether the card landed reversed.
    pub is_reversed: bool,
}

impl DrawnCard {
    /// "Upright" or "Reversed".
    pub fn orientation(&self) -> &'static str {
        if self.is_reversed { "Reversed" } else { "Upright" }
    }

    /// The meaning text matching this card's orientation.
    pub fn meaning(&self) -> &str {
        if self.is_reversed {
            &self.card.reversed_meaning
        } else {
            &self.card.upright_meaning
        }
    }
}

/// Draw `count` distinct cards from a shuffled copy of the deck.
///
/// The full deck is shuffled and the first `count` cards taken, so one
/// draw never repeats a card. A count past the deck size clamps to the
/// deck size, and zero yields an empty draw; neither is an error. Each
/// card lands reversed on an independent coin flip.
pub fn draw_cards(deck: &Deck, count: usize, rng: &mut StdRng) -> Vec<DrawnCard> {
    let mut order: Vec<&Card> = deck.cards().iter().collect();
    order.shuffle(rng);
    order
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, card)| DrawnCard {
            card: card.clone(),
            position: format!("Position {}", i + 1),
            is_reversed: rng.random_bool(0.5),
        })
        .collect()
}

/// Draw a single card for daily guidance.
///
/// Same as `draw_cards(deck, 1, rng)` but unwrapped to the one card.
pub fn daily_card(deck: &Deck, rng: &mut StdRng) -> DrawnCard {
    draw_cards(deck, 1, rng)
        .into_iter()
        .next()
        .expect("the standard deck is never empty")
}
