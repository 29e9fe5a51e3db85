//! Predicates over tree nodes, combinable with `any`/`all`.

mod matcher;

pub use matcher::Matcher;
