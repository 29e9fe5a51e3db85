mod materialize;

pub use materialize::{MaterializeError, materialize};
