use arcanum_core::Deck;
use colored::Colorize;

pub fn run(query: &str, json: bool) -> Result<(), String> {
    let deck = Deck::standard();
    let card = deck
        .card_named(query)
        .ok_or_else(|| format!("card not found: \"{query}\""))?;

    if json {
        let out = serde_json::to_string_pretty(card).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    // Header
    let kind_str = match (card.suit, card.number) {
        (Some(suit), _) => format!("minor arcana, {suit}"),
        (None, Some(number)) => format!("major arcana {number}"),
        (None, None) => "major arcana".to_string(),
    };
    println!("  {} [{}]", card.name.bold(), kind_str.dimmed());
    println!();

    println!("  element:  {}", card.element);
    println!("  keywords: {}", card.keywords.join(", "));
    println!();
    println!("  upright:  {}", card.upright_meaning);
    println!("  reversed: {}", card.reversed_meaning);
    println!();

    for line in card.description.lines() {
        println!("  {}", line.trim());
    }

    Ok(())
}
