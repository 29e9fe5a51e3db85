mod render;

pub use render::{Entry, entries, render};
