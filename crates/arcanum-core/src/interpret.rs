//! The interpretation renderer.
//!
//! Turns a completed [`Reading`] into a markdown report: a per-card
//! breakdown followed by an overall narrative. The narrative is a fixed
//! sequence of rules, each contributing one paragraph when its trigger
//! condition holds. Rendering is pure; the same reading always produces
//! the same text.

use crate::card::{Arcana, Suit};
use crate::reading::{DEFAULT_QUESTION, Reading};
use crate::spread::{Spread, spread_by_name};

/// Text returned when a reading names a spread the catalog does not hold.
pub const CANNOT_INTERPRET: &str = "Unable to interpret reading - spread not found";

/// Render a reading as a markdown report.
///
/// The reading's spread is resolved by display name. A reading whose
/// spread matches nothing in the catalog renders as the fixed
/// [`CANNOT_INTERPRET`] text instead; that is a reportable outcome, not
/// an error. The question line is skipped when the question is empty or
/// still the assembler's default placeholder.
pub fn interpret_reading(reading: &Reading, spreads: &[Spread]) -> String {
    let Some(spread) = spread_by_name(spreads, &reading.spread) else {
        return CANNOT_INTERPRET.to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("# {} Reading\n\n", reading.spread));

    if !reading.question.is_empty() && reading.question != DEFAULT_QUESTION {
        out.push_str(&format!("**Question:** {}\n\n", reading.question));
    }

    out.push_str("## Cards Drawn:\n\n");
    for (drawn, position) in reading.cards.iter().zip(&spread.positions) {
        out.push_str(&format!(
            "### {}: {} ({})\n",
            position.name,
            drawn.card.name,
            drawn.orientation()
        ));
        out.push_str(&format!("**Position Meaning:** {}\n", position.meaning));
        out.push_str(&format!("**Card Meaning:** {}\n", drawn.meaning()));
        out.push_str(&format!("**Keywords:** {}\n\n", drawn.card.keywords.join(", ")));
    }

    out.push_str("## Overall Interpretation:\n\n");
    out.push_str(&overall_narrative(reading, spread));
    out
}

type NarrativeRule = fn(&Reading, &Spread) -> Option<String>;

/// Narrative rules in their fixed order of appearance.
const NARRATIVE_RULES: &[NarrativeRule] = &[
    major_presence,
    suit_dominance,
    reversal_ratio,
    spread_commentary,
    closing,
];

fn overall_narrative(reading: &Reading, spread: &Spread) -> String {
    NARRATIVE_RULES
        .iter()
        .filter_map(|rule| rule(reading, spread))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn major_presence(reading: &Reading, _spread: &Spread) -> Option<String> {
    let count = reading
        .cards
        .iter()
        .filter(|d| d.card.arcana == Arcana::Major)
        .count();
    if count == 0 {
        return None;
    }
    let plural = if count > 1 { "s" } else { "" };
    Some(format!(
        "This reading contains {count} Major Arcana card{plural}, indicating \
         significant life themes and spiritual lessons at play."
    ))
}

fn suit_dominance(reading: &Reading, _spread: &Spread) -> Option<String> {
    let mut dominant: Option<(Suit, usize)> = None;
    for suit in Suit::all().iter().copied() {
        let tally = reading
            .cards
            .iter()
            .filter(|d| d.card.suit == Some(suit))
            .count();
        // Strict comparison keeps the earliest suit on a tie.
        if tally > 1 && dominant.is_none_or(|(_, best)| tally > best) {
            dominant = Some((suit, tally));
        }
    }
    let (suit, count) = dominant?;
    let gloss = match suit {
        Suit::Wands => "creativity, passion, and action",
        Suit::Cups => "emotions, relationships, and intuition",
        Suit::Swords => "thoughts, communication, and challenges",
        Suit::Pentacles => "material matters, work, and practical concerns",
    };
    Some(format!(
        "The presence of {count} {suit} cards suggests a focus on {gloss}."
    ))
}

fn reversal_ratio(reading: &Reading, _spread: &Spread) -> Option<String> {
    let reversed = reading.cards.iter().filter(|d| d.is_reversed).count();
    // Strictly more than half the cards.
    if reversed * 2 <= reading.cards.len() {
        return None;
    }
    Some(format!(
        "With {reversed} reversed cards, there may be internal blocks, delays, \
         or a need for inner reflection before external action."
    ))
}

fn spread_commentary(_reading: &Reading, spread: &Spread) -> Option<String> {
    let text = match spread.id.as_str() {
        "past-present-future" => {
            "This temporal reading shows the evolution of your situation from past \
             influences through current circumstances to likely future outcomes."
        }
        "celtic-cross" => {
            "This comprehensive Celtic Cross reading provides deep insight into your \
             situation, revealing both conscious and unconscious factors, as well as \
             internal and external influences shaping your path forward."
        }
        "relationship-spread" => {
            "This relationship reading reveals the dynamics between you and another, \
             highlighting both challenges to address and strengths to build upon."
        }
        _ => return None,
    };
    Some(text.to_string())
}

fn closing(_reading: &Reading, _spread: &Spread) -> Option<String> {
    Some(
        "Remember that tarot provides guidance and insight, but you always have the \
         power to shape your own destiny through your choices and actions."
            .to_string(),
    )
}
