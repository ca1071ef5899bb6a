//! End-to-end tests for the `arcanum` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arcanum() -> Command {
    Command::cargo_bin("arcanum").unwrap()
}

/// Capture stdout of a seeded `reading --json` run.
fn reading_json(spread: &str, seed: &str) -> Vec<u8> {
    arcanum()
        .args(["reading", spread, "--json", "--seed", seed])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone()
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_one_card_by_default() {
    arcanum()
        .arg("draw")
        .assert()
        .success()
        .stdout(predicate::str::contains("Position 1:"));
}

#[test]
fn draw_respects_count() {
    arcanum()
        .args(["draw", "3", "--seed", "9"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Position 1:")
                .and(predicate::str::contains("Position 2:"))
                .and(predicate::str::contains("Position 3:")),
        );
}

#[test]
fn draw_clamps_to_deck_size() {
    arcanum()
        .args(["draw", "100", "--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Position 78:")
                .and(predicate::str::contains("Position 79:").not()),
        );
}

#[test]
fn draw_zero_cards() {
    arcanum()
        .args(["draw", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards drawn."));
}

#[test]
fn draw_seed_is_reproducible() {
    let first = arcanum()
        .args(["draw", "5", "--seed", "42"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = arcanum()
        .args(["draw", "5", "--seed", "42"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
}

#[test]
fn draw_json_valid_output() {
    let output = arcanum()
        .args(["draw", "2", "--json", "--seed", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    let cards = json.as_array().expect("array of drawn cards");
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["position"], "Position 1");
    assert!(cards[0]["is_reversed"].is_boolean());
    assert!(cards[0]["card"]["name"].is_string());
}

// ---------------------------------------------------------------------------
// daily
// ---------------------------------------------------------------------------

#[test]
fn daily_prints_card_of_the_day() {
    arcanum()
        .arg("daily")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Card of the day:")
                .and(predicate::str::contains("keywords:")),
        );
}

#[test]
fn daily_seed_is_reproducible() {
    let first = arcanum()
        .args(["daily", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = arcanum()
        .args(["daily", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// reading
// ---------------------------------------------------------------------------

#[test]
fn reading_renders_interpretation() {
    arcanum()
        .args(["reading", "past-present-future", "--seed", "11"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Past, Present, Future Reading")
                .and(predicate::str::contains("## Cards Drawn:"))
                .and(predicate::str::contains("## Overall Interpretation:"))
                .and(predicate::str::contains("shape your own destiny")),
        );
}

#[test]
fn reading_includes_question() {
    arcanum()
        .args([
            "reading",
            "single-card",
            "Will",
            "I",
            "find",
            "my",
            "path?",
            "--seed",
            "11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Question:** Will I find my path?",
        ));
}

#[test]
fn reading_omits_question_when_not_asked() {
    arcanum()
        .args(["reading", "single-card", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Question:**").not());
}

#[test]
fn reading_unknown_spread_fails() {
    arcanum()
        .args(["reading", "nonagram"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown spread")
                .and(predicate::str::contains("nonagram")),
        );
}

#[test]
fn reading_json_valid_output() {
    let output = reading_json("past-present-future", "11");

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["spread"], "Past, Present, Future");
    assert_eq!(json["question"], "General reading");
    assert!(
        json["id"]
            .as_str()
            .expect("string id")
            .starts_with("reading-")
    );
    assert_eq!(json["cards"].as_array().expect("cards array").len(), 3);
}

#[test]
fn reading_json_positions_follow_spread() {
    let output = reading_json("past-present-future", "11");

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["cards"][0]["position"], "Past");
    assert_eq!(json["cards"][1]["position"], "Present");
    assert_eq!(json["cards"][2]["position"], "Future");
}

// ---------------------------------------------------------------------------
// interpret
// ---------------------------------------------------------------------------

#[test]
fn interpret_reads_reading_from_file() {
    let json = reading_json("celtic-cross", "7");

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reading.json");
    fs::write(&path, &json).unwrap();

    arcanum()
        .args(["interpret", "-f", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Celtic Cross Reading")
                .and(predicate::str::contains("## Overall Interpretation:")),
        );
}

#[test]
fn interpret_reads_reading_from_stdin() {
    let json = reading_json("single-card", "7");

    arcanum()
        .arg("interpret")
        .write_stdin(json)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Single Card Reading"));
}

#[test]
fn interpret_rejects_invalid_json() {
    arcanum()
        .arg("interpret")
        .write_stdin("this is not a reading")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid reading JSON"));
}

#[test]
fn interpret_missing_file_fails() {
    arcanum()
        .args(["interpret", "-f", "no-such-reading.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn interpret_unknown_spread_is_reported_not_failed() {
    // A reading the assembler never produced: the spread name matches
    // nothing, so the renderer answers with its fixed apology and the
    // command still exits cleanly.
    let fabricated = r#"{"id":"reading-0","timestamp":"2024-01-01T00:00:00Z","spread":"Nonsense Spread","question":"General reading","cards":[]}"#;

    arcanum()
        .arg("interpret")
        .write_stdin(fabricated)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unable to interpret reading - spread not found",
        ));
}

// ---------------------------------------------------------------------------
// card
// ---------------------------------------------------------------------------

#[test]
fn card_lookup_by_name() {
    arcanum()
        .args(["card", "The", "Fool"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fool")
                .and(predicate::str::contains("major arcana 0"))
                .and(predicate::str::contains("upright:"))
                .and(predicate::str::contains("reversed:")),
        );
}

#[test]
fn card_lookup_is_case_insensitive() {
    arcanum()
        .args(["card", "the", "high", "priestess"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The High Priestess"));
}

#[test]
fn card_lookup_by_id() {
    arcanum()
        .args(["card", "two_of_cups"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Two of Cups")
                .and(predicate::str::contains("minor arcana, cups")),
        );
}

#[test]
fn card_not_found() {
    arcanum()
        .args(["card", "the", "joker"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("card not found")
                .and(predicate::str::contains("the joker")),
        );
}

// ---------------------------------------------------------------------------
// cards
// ---------------------------------------------------------------------------

#[test]
fn cards_lists_full_deck() {
    arcanum()
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool").and(predicate::str::contains("78 cards")));
}

#[test]
fn cards_filters_by_arcana() {
    arcanum()
        .args(["cards", "--arcana", "major"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("22 cards")
                .and(predicate::str::contains("The Fool"))
                .and(predicate::str::contains("Ace of Wands").not()),
        );
}

#[test]
fn cards_filters_by_suit() {
    arcanum()
        .args(["cards", "--suit", "cups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14 cards"));
}

#[test]
fn cards_json_valid_output() {
    let output = arcanum()
        .args(["cards", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json.as_array().expect("card array").len(), 78);
    assert_eq!(json[0]["id"], "the_fool");
}

#[test]
fn cards_rejects_unknown_suit() {
    arcanum()
        .args(["cards", "--suit", "coins"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown suit"));
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[test]
fn search_finds_matches() {
    arcanum()
        .args(["search", "love"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("results for \"love\"")
                .and(predicate::str::contains("The Lovers")),
        );
}

#[test]
fn search_no_results() {
    arcanum()
        .args(["search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results for \"zzzz\"."));
}

// ---------------------------------------------------------------------------
// spreads
// ---------------------------------------------------------------------------

#[test]
fn spreads_lists_all_ten() {
    arcanum()
        .arg("spreads")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("celtic-cross").and(predicate::str::contains("10 spreads")),
        );
}

#[test]
fn spread_shows_positions() {
    arcanum()
        .args(["spread", "celtic-cross"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Celtic Cross")
                .and(predicate::str::contains("Final Outcome"))
                .and(predicate::str::contains("10.")),
        );
}

#[test]
fn spread_json_valid_output() {
    let output = arcanum()
        .args(["spread", "celtic-cross", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON output");
    assert_eq!(json["name"], "Celtic Cross");
    assert_eq!(json["positions"].as_array().expect("positions").len(), 10);
    assert_eq!(json["positions"][9]["name"], "Final Outcome");
}

#[test]
fn spread_unknown_id_fails() {
    arcanum()
        .args(["spread", "nonagram"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown spread")
                .and(predicate::str::contains("nonagram")),
        );
}

// ---------------------------------------------------------------------------
// console
// ---------------------------------------------------------------------------

#[test]
fn console_processes_commands_until_quit() {
    arcanum()
        .args(["console", "--seed", "4"])
        .write_stdin("draw\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Position 1:").and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn console_reports_unknown_commands() {
    arcanum()
        .args(["console", "--seed", "4"])
        .write_stdin("banish\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: banish"));
}

#[test]
fn console_exits_on_eof() {
    arcanum()
        .args(["console", "--seed", "4"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting Arcanum Console"));
}
