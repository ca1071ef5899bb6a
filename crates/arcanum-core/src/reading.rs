//! Reading assembly.
//!
//! A reading draws exactly as many cards as its spread has positions and
//! binds each card to the matching position name. Readings are plain
//! values; nothing here stores them.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::draw::{DrawnCard, draw_cards};
use crate::spread::{Spread, spread_by_id};

/// Question recorded when the caller does not supply one.
pub const DEFAULT_QUESTION: &str = "General reading";

/// A completed draw bound to a spread's positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Identifier derived from the construction time.
    pub id: String,
    /// When the reading was performed.
    pub timestamp: DateTime<Utc>,
    /// Display name of the spread used. Interpretation resolves the
    /// spread back through this name.
    pub spread: String,
    /// The question asked, or [`DEFAULT_QUESTION`].
    pub question: String,
    /// One drawn card per spread position, in position order.
    pub cards: Vec<DrawnCard>,
}

/// Draw a full spread and bind the cards to its positions.
///
/// Returns `None` when no spread carries the given id. An empty or
/// missing question is recorded as [`DEFAULT_QUESTION`]; anything else
/// is stored verbatim.
///
/// The reading id is the construction time in milliseconds behind a
/// fixed prefix. Two readings within the same millisecond would collide;
/// with no persistence and a single caller that stays a theoretical
/// gap rather than a practical one.
pub fn perform_reading(
    deck: &Deck,
    spreads: &[Spread],
    spread_id: &str,
    question: Option<&str>,
    rng: &mut StdRng,
) -> Option<Reading> {
    let spread = spread_by_id(spreads, spread_id)?;
    let now = Utc::now();
    let mut cards = draw_cards(deck, spread.size(), rng);
    for (card, position) in cards.iter_mut().zip(&spread.positions) {
        card.position = position.name.clone();
    }
    let question = match question {
        Some(q) if !q.is_empty() => q.to_string(),
        _ => DEFAULT_QUESTION.to_string(),
    };
    Some(Reading {
        id: format!("reading-{}", now.timestamp_millis()),
        timestamp: now,
        spread: spread.name.clone(),
        question,
        cards,
    })
}
