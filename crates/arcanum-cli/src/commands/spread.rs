use arcanum_core::{spread_by_id, standard_spreads};
use colored::Colorize;

pub fn run(id: &str, json: bool) -> Result<(), String> {
    let spreads = standard_spreads();
    let spread = spread_by_id(&spreads, id)
        .ok_or_else(|| format!("unknown spread: \"{id}\" (run `arcanum spreads` for the list)"))?;

    if json {
        let out = serde_json::to_string_pretty(spread).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {} [{}]", spread.name.bold(), spread.id.dimmed());
    println!("  {}", spread.description);
    println!();

    for position in &spread.positions {
        println!("  {:2}. {}", position.number, position.name.bold());
        println!("      {}", position.meaning);
    }

    Ok(())
}
