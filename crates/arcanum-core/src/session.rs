//! Interactive tarot session.
//!
//! `Session` wraps the deck, the spread catalog, and one random number
//! generator behind a line-command interface: draw cards, perform and
//! interpret readings, and look things up. Readings stay in an in-memory
//! history for the lifetime of the session; nothing is persisted.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::card::{Arcana, Card};
use crate::config::SessionConfig;
use crate::deck::Deck;
use crate::draw::{daily_card, draw_cards};
use crate::error::{SessionError, SessionResult};
use crate::interpret::interpret_reading;
use crate::reading::{DEFAULT_QUESTION, Reading, perform_reading};
use crate::spread::{Spread, spread_by_id, standard_spreads};

/// An interactive reading session.
pub struct Session {
    deck: Deck,
    spreads: Vec<Spread>,
    history: Vec<Reading>,
    rng: StdRng,
}

impl Session {
    /// Create a session over the standard deck and spreads.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            deck: Deck::standard(),
            spreads: standard_spreads(),
            history: Vec::new(),
            rng,
        }
    }

    /// The deck this session draws from.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The spreads this session can read with.
    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    /// Readings performed so far, oldest first.
    pub fn history(&self) -> &[Reading] {
        &self.history
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "draw" => self.do_draw(rest),
            "daily" => self.do_daily(),
            "reading" | "read" => self.do_reading(rest),
            "interpret" => self.do_interpret(),
            "history" => self.do_history(),
            "card" => self.do_card(rest),
            "cards" => self.do_cards(rest),
            "search" => self.do_search(rest),
            "spreads" => self.do_spreads(),
            "spread" => self.do_spread(rest),
            "help" => self.do_help(rest),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SessionError::UnknownCommand(cmd)),
        }
    }

    fn do_draw(&mut self, rest: &str) -> SessionResult<String> {
        let count = if rest.is_empty() {
            1
        } else {
            rest.parse::<usize>()
                .map_err(|_| SessionError::InvalidInput("usage: draw [count]".to_string()))?
        };

        let drawn = draw_cards(&self.deck, count, &mut self.rng);
        if drawn.is_empty() {
            return Ok("No cards drawn.".to_string());
        }

        let mut out = String::new();
        for card in &drawn {
            out.push_str(&format!(
                "{}: {} ({})\n  {}\n",
                card.position,
                card.card.name,
                card.orientation(),
                card.meaning()
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_daily(&mut self) -> SessionResult<String> {
        let card = daily_card(&self.deck, &mut self.rng);
        Ok(format!(
            "Card of the day: {} ({})\n  {}",
            card.card.name,
            card.orientation(),
            card.meaning()
        ))
    }

    fn do_reading(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidInput(
                "usage: reading <spread> [question]".to_string(),
            ));
        }

        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let spread_id = parts[0];
        let question = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

        let reading =
            perform_reading(&self.deck, &self.spreads, spread_id, question, &mut self.rng)
                .ok_or_else(|| SessionError::SpreadNotFound(spread_id.to_string()))?;

        let mut out = format!("{} ({})\n", reading.spread, reading.id);
        if reading.question != DEFAULT_QUESTION {
            out.push_str(&format!("Question: {}\n", reading.question));
        }
        for card in &reading.cards {
            out.push_str(&format!(
                "  {}: {} ({})\n",
                card.position,
                card.card.name,
                card.orientation()
            ));
        }
        out.push_str("Use 'interpret' for the full interpretation.");

        self.history.push(reading);
        Ok(out)
    }

    fn do_interpret(&self) -> SessionResult<String> {
        let reading = self.history.last().ok_or(SessionError::NoReading)?;
        Ok(interpret_reading(reading, &self.spreads))
    }

    fn do_history(&self) -> SessionResult<String> {
        if self.history.is_empty() {
            return Ok("No readings yet.".to_string());
        }
        let mut out = String::new();
        for (i, reading) in self.history.iter().enumerate() {
            let count = reading.cards.len();
            let plural = if count == 1 { "" } else { "s" };
            out.push_str(&format!(
                "  {}. {} - {} ({count} card{plural})\n",
                i + 1,
                reading.spread,
                reading.question,
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_card(&self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidInput("usage: card <name>".to_string()));
        }
        let card = self
            .deck
            .card_named(rest)
            .ok_or_else(|| SessionError::CardNotFound(rest.to_string()))?;
        Ok(describe_card(card))
    }

    fn do_cards(&self, rest: &str) -> SessionResult<String> {
        let filter = match rest.to_lowercase().as_str() {
            "" | "all" => None,
            other => Some(Arcana::parse(other).ok_or_else(|| {
                SessionError::InvalidInput("usage: cards [major|minor|all]".to_string())
            })?),
        };

        let cards: Vec<&Card> = self
            .deck
            .cards()
            .iter()
            .filter(|c| filter.is_none_or(|f| c.arcana == f))
            .collect();

        let scope = match filter {
            Some(arcana) => format!("{arcana} cards"),
            None => "cards in the deck".to_string(),
        };
        let mut out = format!("{} {scope}:\n", cards.len());
        for card in &cards {
            out.push_str(&format!("  {} ({})\n", card.name, card.id));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_search(&self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidInput(
                "usage: search <text>".to_string(),
            ));
        }
        let hits = self.deck.search(rest);
        if hits.is_empty() {
            return Ok(format!("No cards match '{rest}'."));
        }
        let mut out = format!("Matches for '{rest}':\n");
        for card in hits {
            out.push_str(&format!("  {}: {}\n", card.name, card.keywords.join(", ")));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_spreads(&self) -> SessionResult<String> {
        let mut out = String::from("Available spreads:\n");
        for spread in &self.spreads {
            let plural = if spread.size() == 1 { "" } else { "s" };
            out.push_str(&format!(
                "  {} ({} card{plural}): {}\n",
                spread.id,
                spread.size(),
                spread.description
            ));
        }
        out.push_str("Use 'spread <id>' for position details.");
        Ok(out)
    }

    fn do_spread(&self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::InvalidInput("usage: spread <id>".to_string()));
        }
        let spread = spread_by_id(&self.spreads, rest)
            .ok_or_else(|| SessionError::SpreadNotFound(rest.to_string()))?;
        let mut out = format!("{} ({})\n{}\n", spread.name, spread.id, spread.description);
        for position in &spread.positions {
            out.push_str(&format!(
                "  {}. {}: {}\n",
                position.number, position.name, position.meaning
            ));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_help(&self, topic: &str) -> SessionResult<String> {
        match topic.to_lowercase().as_str() {
            "draw" | "daily" => Ok("\
Draw Commands:
  draw [count]                  Draw cards with random orientation
  daily                         Draw a single card of the day"
                .to_string()),
            "reading" | "interpret" | "history" => Ok("\
Reading Commands:
  reading <spread> [question]   Perform a reading on a spread
  interpret                     Interpret the most recent reading
  history                       List readings from this session"
                .to_string()),
            "card" | "cards" | "search" => Ok("\
Card Commands:
  card <name>                   Show one card's meanings
  cards [major|minor]           List the deck, optionally one arcana
  search <text>                 Search names, keywords, and descriptions"
                .to_string()),
            "spread" | "spreads" => Ok("\
Spread Commands:
  spreads                       List available spreads
  spread <id>                   Show a spread's positions"
                .to_string()),
            _ => Ok("\
Tarot Commands:
  draw [count]                  Draw cards
  daily                         Card of the day
  reading <spread> [question]   Perform a reading
  interpret                     Interpret the last reading
  history                       List past readings
  card <name>                   Show a card
  cards [major|minor]           List the deck
  search <text>                 Search the deck
  spreads                       List spreads
  spread <id>                   Show spread positions
  help [topic]                  Show help (draw, reading, card, spread)
  quit                          Exit"
                .to_string()),
        }
    }
}

/// Render one card's full entry.
fn describe_card(card: &Card) -> String {
    let mut header = format!("{} ({} arcana", card.name, card.arcana);
    if let Some(number) = card.number {
        header.push_str(&format!(" {number}"));
    }
    header.push(')');

    let mut out = format!("{header}, {}\n", card.element);
    out.push_str(&format!("Keywords: {}\n", card.keywords.join(", ")));
    out.push_str(&format!("Upright: {}\n", card.upright_meaning));
    out.push_str(&format!("Reversed: {}\n\n", card.reversed_meaning));
    out.push_str(&card.description);
    out
}
