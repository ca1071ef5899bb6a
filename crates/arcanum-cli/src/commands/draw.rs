use arcanum_core::{Deck, draw_cards};
use colored::Colorize;

pub fn run(count: usize, seed: Option<u64>, json: bool) -> Result<(), String> {
    let deck = Deck::standard();
    let mut rng = super::rng_from(seed);
    let drawn = draw_cards(&deck, count, &mut rng);

    if json {
        let out = serde_json::to_string_pretty(&drawn).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if drawn.is_empty() {
        println!("  No cards drawn.");
        return Ok(());
    }

    for card in &drawn {
        println!(
            "  {}: {} {}",
            card.position.dimmed(),
            card.card.name.bold(),
            format!("({})", card.orientation()).dimmed()
        );
        println!("    {}", card.meaning());
    }

    Ok(())
}
