use arcanum_core::{Deck, daily_card};
use colored::Colorize;

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let deck = Deck::standard();
    let mut rng = super::rng_from(seed);
    let card = daily_card(&deck, &mut rng);

    if json {
        let out = serde_json::to_string_pretty(&card).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  Card of the day: {} {}",
        card.card.name.bold(),
        format!("({})", card.orientation()).dimmed()
    );
    println!("    {}", card.meaning());
    println!();
    println!("  keywords: {}", card.card.keywords.join(", "));

    Ok(())
}
