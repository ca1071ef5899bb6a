pub mod card;
pub mod cards;
pub mod console;
pub mod daily;
pub mod draw;
pub mod interpret;
pub mod reading;
pub mod search;
pub mod spread;
pub mod spreads;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Build the generator for a single command invocation.
/// A fixed seed replays the exact same shuffle and orientations.
fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
