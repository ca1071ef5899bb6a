use arcanum_core::{Arcana, Card, Deck, Suit};
use comfy_table::{ContentArrangement, Table};

pub fn run(arcana: Option<&str>, suit: Option<&str>, json: bool) -> Result<(), String> {
    let deck = Deck::standard();

    let arcana = arcana
        .map(|s| Arcana::parse(s).ok_or_else(|| format!("unknown arcana: \"{s}\"")))
        .transpose()?;
    let suit = suit
        .map(|s| Suit::parse(s).ok_or_else(|| format!("unknown suit: \"{s}\"")))
        .transpose()?;

    let results: Vec<&Card> = deck
        .cards()
        .iter()
        .filter(|c| arcana.is_none_or(|a| c.arcana == a))
        .filter(|c| suit.is_none_or(|s| c.suit == Some(s)))
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if results.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Card", "Arcana", "Element", "Keywords"]);

    for card in &results {
        let arcana_str = match card.suit {
            Some(suit) => format!("{} ({suit})", card.arcana),
            None => card.arcana.to_string(),
        };
        let element_str = card.element.to_string();
        let keywords = card.keywords.join(", ");

        table.add_row(vec![&card.name, &arcana_str, &element_str, &keywords]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", results.len());

    Ok(())
}
