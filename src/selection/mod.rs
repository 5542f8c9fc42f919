pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use roulette::RouletteWheelSelection;
pub use selection_strategy::{SelectionMethod, SelectionStrategy};
pub use tournament::TournamentSelection;
