use std::io::Read;
use std::path::Path;

use arcanum_core::{Reading, interpret_reading, standard_spreads};

pub fn run(file: Option<&Path>) -> Result<(), String> {
    let json = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            buf
        }
    };

    let reading: Reading =
        serde_json::from_str(&json).map_err(|e| format!("invalid reading JSON: {e}"))?;

    let spreads = standard_spreads();
    println!("{}", interpret_reading(&reading, &spreads));

    Ok(())
}
