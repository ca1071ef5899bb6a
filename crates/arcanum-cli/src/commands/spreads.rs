use arcanum_core::standard_spreads;
use comfy_table::{ContentArrangement, Table};

pub fn run(json: bool) -> Result<(), String> {
    let spreads = standard_spreads();

    if json {
        let out = serde_json::to_string_pretty(&spreads).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Cards", "Description"]);

    for spread in &spreads {
        let size = spread.size().to_string();
        let desc = if spread.description.len() > 60 {
            format!("{}...", &spread.description[..57])
        } else {
            spread.description.clone()
        };

        table.add_row(vec![&spread.id, &spread.name, &size, &desc]);
    }

    println!("{table}");
    println!();
    println!("  {} spreads", spreads.len());

    Ok(())
}
