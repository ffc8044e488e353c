pub mod engine;
pub mod rack;
pub mod solver;

pub use engine::{result_order, search_words, SearchIter};
pub use rack::{parse_required, Rack, Tile, WILDCARD};
pub use solver::Solver;
