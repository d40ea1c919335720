mod data;
mod engine;
mod knowledge;
mod results;

pub use data::GuessHistory;
pub use engine::*;
pub use knowledge::Knowledge;
pub use results::*;
