mod bag;
mod error;
mod input;
mod selector;
mod triplet;

pub use bag::Bag;
pub use error::SelectError;
pub use input::Problem;
pub use selector::{solve, ExhaustionPolicy, GreedyTripleSelector, Mode, Step, SENTINEL};
pub use triplet::{Field, Quotas, Triplet, Value};
