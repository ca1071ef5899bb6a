//! Spread layouts.
//!
//! A spread is a fixed template of named positions. [`standard_spreads`]
//! returns the ten built-in layouts, from the single-card draw up to the
//! twelve-card year wheel. Spreads are plain data; the draw and
//! interpretation logic lives in [`crate::reading`] and
//! [`crate::interpret`].

use serde::{Deserialize, Serialize};

/// One slot within a spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// 1-based slot number, contiguous within its spread.
    pub number: u8,
    /// Display name, e.g. "Past".
    pub name: String,
    /// Interpretive guidance for whatever card lands in this slot.
    pub meaning: String,
}

/// A named layout template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spread {
    /// Stable identifier, e.g. "celtic-cross".
    pub id: String,
    /// Display name, e.g. "Celtic Cross".
    pub name: String,
    /// One line on what the spread is for.
    pub description: String,
    /// Slots in layout order, numbered 1 through the spread's length.
    pub positions: Vec<Position>,
}

impl Spread {
    /// Number of cards this spread calls for.
    pub fn size(&self) -> usize {
        self.positions.len()
    }
}

fn spread(id: &str, name: &str, description: &str, positions: &[(&str, &str)]) -> Spread {
    Spread {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        positions: positions
            .iter()
            .enumerate()
            .map(|(i, (name, meaning))| Position {
                number: (i + 1) as u8,
                name: (*name).to_string(),
                meaning: (*meaning).to_string(),
            })
            .collect(),
    }
}

/// Build the ten standard spreads.
pub fn standard_spreads() -> Vec<Spread> {
    vec![
        spread(
            "single-card",
            "Single Card",
            "A simple one-card draw for quick insight or daily guidance",
            &[("Present", "Current situation or energy")],
        ),
        spread(
            "past-present-future",
            "Past, Present, Future",
            "A three-card spread showing temporal progression",
            &[
                ("Past", "Past influences affecting the situation"),
                ("Present", "Current situation and energies"),
                ("Future", "Likely outcome or future direction"),
            ],
        ),
        spread(
            "situation-action-outcome",
            "Situation, Action, Outcome",
            "A practical three-card spread for decision making",
            &[
                ("Situation", "Current circumstances"),
                ("Action", "Recommended action or approach"),
                ("Outcome", "Likely result if action is taken"),
            ],
        ),
        spread(
            "mind-body-spirit",
            "Mind, Body, Spirit",
            "A holistic three-card spread for self-reflection",
            &[
                ("Mind", "Mental state and thoughts"),
                ("Body", "Physical world and material concerns"),
                ("Spirit", "Spiritual energy and higher self"),
            ],
        ),
        spread(
            "celtic-cross",
            "Celtic Cross",
            "The classic 10-card spread for in-depth analysis",
            &[
                ("Present Situation", "Current circumstances and state of being"),
                ("Cross/Challenge", "What crosses you - challenges or opposing forces"),
                ("Distant Past", "Foundation and root of the matter"),
                ("Recent Past", "Recent events leading to present"),
                ("Possible Future", "Potential outcome if path continues"),
                ("Immediate Future", "What will happen in the near future"),
                ("Your Approach", "Your current approach to the situation"),
                ("External Influences", "Environmental factors and other people"),
                ("Hopes and Fears", "Your deepest hopes or fears about the outcome"),
                ("Final Outcome", "The likely final outcome"),
            ],
        ),
        spread(
            "relationship-spread",
            "Relationship Spread",
            "A 7-card spread examining relationship dynamics",
            &[
                ("Your Feelings", "How you feel about the relationship"),
                ("Their Feelings", "How they feel about the relationship"),
                ("Connection", "The nature of your connection"),
                ("Challenges", "Current or upcoming challenges"),
                ("Strengths", "Relationship strengths to build on"),
                ("Advice", "Guidance for the relationship"),
                ("Potential", "Where the relationship is heading"),
            ],
        ),
        spread(
            "career-spread",
            "Career Path",
            "A 5-card spread for career guidance",
            &[
                ("Current Position", "Your current career situation"),
                ("Strengths", "Your professional strengths"),
                ("Challenges", "Obstacles to overcome"),
                ("Opportunities", "Upcoming opportunities"),
                ("Outcome", "Career trajectory if current path continues"),
            ],
        ),
        spread(
            "horseshoe",
            "Horseshoe",
            "A 7-card spread for general guidance",
            &[
                ("Past", "Past influences"),
                ("Present", "Current situation"),
                ("Hidden Influences", "Unseen factors at play"),
                ("Obstacles", "Challenges to overcome"),
                ("Environment", "External influences"),
                ("Advice", "Recommended approach"),
                ("Outcome", "Most likely outcome"),
            ],
        ),
        spread(
            "year-ahead",
            "Year Ahead",
            "A 12-card spread with one card for each month",
            &[
                ("January", "Energy and themes for January"),
                ("February", "Energy and themes for February"),
                ("March", "Energy and themes for March"),
                ("April", "Energy and themes for April"),
                ("May", "Energy and themes for May"),
                ("June", "Energy and themes for June"),
                ("July", "Energy and themes for July"),
                ("August", "Energy and themes for August"),
                ("September", "Energy and themes for September"),
                ("October", "Energy and themes for October"),
                ("November", "Energy and themes for November"),
                ("December", "Energy and themes for December"),
            ],
        ),
        spread(
            "decision-making",
            "Decision Making",
            "A 5-card spread for making difficult decisions",
            &[
                ("The Decision", "The core of the decision"),
                ("Option A Result", "Outcome if you choose option A"),
                ("Option B Result", "Outcome if you choose option B"),
                ("What You Need to Know", "Important information to consider"),
                ("Guidance", "Overall guidance for your decision"),
            ],
        ),
    ]
}

/// Find a spread by its identifier.
pub fn spread_by_id<'a>(spreads: &'a [Spread], id: &str) -> Option<&'a Spread> {
    spreads.iter().find(|s| s.id == id)
}

/// Find a spread by its display name.
///
/// Readings store the spread name rather than the id, so interpretation
/// resolves through this path.
pub fn spread_by_name<'a>(spreads: &'a [Spread], name: &str) -> Option<&'a Spread> {
    spreads.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_spreads_defined() {
        assert!(standard_spreads().len() >= 10);
    }

    #[test]
    fn all_fields_populated() {
        for spread in standard_spreads() {
            assert!(!spread.id.is_empty());
            assert!(!spread.name.is_empty());
            assert!(!spread.description.is_empty());
            assert!(!spread.positions.is_empty());
            for position in &spread.positions {
                assert!(!position.name.is_empty());
                assert!(!position.meaning.is_empty());
            }
        }
    }

    #[test]
    fn ids_are_unique() {
        let spreads = standard_spreads();
        let ids: std::collections::HashSet<&str> =
            spreads.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), spreads.len());
    }

    #[test]
    fn position_numbers_are_consecutive_from_one() {
        for spread in standard_spreads() {
            for (i, position) in spread.positions.iter().enumerate() {
                assert_eq!(
                    position.number as usize,
                    i + 1,
                    "position {i} of {}",
                    spread.id
                );
            }
        }
    }

    #[test]
    fn single_card_has_one_position() {
        let spreads = standard_spreads();
        let single = spread_by_id(&spreads, "single-card").expect("spread exists");
        assert_eq!(single.size(), 1);
    }

    #[test]
    fn past_present_future_positions_in_order() {
        let spreads = standard_spreads();
        let ppf = spread_by_id(&spreads, "past-present-future").expect("spread exists");
        let names: Vec<&str> = ppf.positions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Past", "Present", "Future"]);
    }

    #[test]
    fn celtic_cross_has_ten_positions() {
        let spreads = standard_spreads();
        let cross = spread_by_id(&spreads, "celtic-cross").expect("spread exists");
        assert_eq!(cross.size(), 10);
        assert_eq!(cross.name, "Celtic Cross");
    }

    #[test]
    fn relationship_spread_has_seven_positions() {
        let spreads = standard_spreads();
        let rel = spread_by_id(&spreads, "relationship-spread").expect("spread exists");
        assert_eq!(rel.size(), 7);
    }

    #[test]
    fn year_ahead_runs_january_to_december() {
        let spreads = standard_spreads();
        let year = spread_by_id(&spreads, "year-ahead").expect("spread exists");
        assert_eq!(year.size(), 12);
        assert_eq!(year.positions[0].name, "January");
        assert_eq!(year.positions[11].name, "December");
    }

    #[test]
    fn decision_making_has_five_positions() {
        let spreads = standard_spreads();
        let decision = spread_by_id(&spreads, "decision-making").expect("spread exists");
        assert_eq!(decision.size(), 5);
    }

    #[test]
    fn lookup_by_name_is_exact() {
        let spreads = standard_spreads();
        assert!(spread_by_name(&spreads, "Celtic Cross").is_some());
        assert!(spread_by_name(&spreads, "celtic cross").is_none());
        assert!(spread_by_id(&spreads, "no-such-spread").is_none());
    }
}
