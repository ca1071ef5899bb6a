use arcanum_core::Deck;

pub fn run(query: &str, json: bool) -> Result<(), String> {
    let deck = Deck::standard();
    let results = deck.search(query);

    if json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if results.is_empty() {
        println!("  No results for \"{query}\".");
        return Ok(());
    }

    println!("  {} results for \"{query}\":", results.len());
    println!();

    for card in &results {
        let kind_str = match card.suit {
            Some(suit) => format!("minor, {suit}"),
            None => "major".to_string(),
        };

        println!("  {} [{}]", card.name, kind_str);
        println!("    {}", card.keywords.join(", "));
    }

    Ok(())
}
