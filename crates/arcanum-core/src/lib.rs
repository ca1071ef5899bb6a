//! Tarot reading engine: deck catalog, spreads, draws, and interpretation.
//!
//! The deck and spread catalogs are immutable data built once at startup.
//! On top of them sit a draw engine (shuffle, take, coin-flip orientation),
//! a reading assembler that binds draws to spread positions, and a pure
//! renderer that turns a reading into a markdown interpretation. All
//! randomness flows through a caller-supplied generator, so seeded runs
//! reproduce exactly.

pub mod card;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod interpret;
pub mod reading;
pub mod session;
pub mod spread;

pub use card::{Arcana, Card, Element, Suit};
pub use config::SessionConfig;
pub use deck::Deck;
pub use draw::{DrawnCard, daily_card, draw_cards};
pub use error::{SessionError, SessionResult};
pub use interpret::{CANNOT_INTERPRET, interpret_reading};
pub use reading::{DEFAULT_QUESTION, Reading, perform_reading};
pub use session::Session;
pub use spread::{Position, Spread, spread_by_id, spread_by_name, standard_spreads};
