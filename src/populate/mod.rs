mod populate;

pub use populate::{PopulateError, populate};
