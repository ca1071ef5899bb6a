use arcanum_core::{Deck, interpret_reading, perform_reading, standard_spreads};

pub fn run(spread_id: &str, question: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let deck = Deck::standard();
    let spreads = standard_spreads();
    let mut rng = super::rng_from(seed);

    let question = (!question.is_empty()).then_some(question);
    let reading = perform_reading(&deck, &spreads, spread_id, question, &mut rng).ok_or_else(
        || format!("unknown spread: \"{spread_id}\" (run `arcanum spreads` for the list)"),
    )?;

    if json {
        let out = serde_json::to_string_pretty(&reading).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", interpret_reading(&reading, &spreads));

    Ok(())
}
