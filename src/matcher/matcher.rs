use regex::Regex;

use crate::tree::Node;

/// A predicate over a single node.
///
/// The three leaf shapes test the node's base filename (substring
/// containment, regex match) or the node itself (custom predicate).
/// The two combinators fold a sequence of matchers, which may
/// themselves be combinators.
pub enum Matcher {
    /// True iff the base filename contains the string.
    Substring(String),
    /// True iff the pattern matches the base filename.
    Pattern(Regex),
    /// True iff the function returns true for the node.
    Predicate(Box<dyn Fn(&Node) -> bool>),
    /// True iff every element matches. Vacuously true when empty.
    All(Vec<Matcher>),
    /// True iff at least one element matches. Vacuously false when
    /// empty.
    Any(Vec<Matcher>),
}

impl Matcher {
    pub fn substring(value: impl Into<String>) -> Self {
        Matcher::Substring(value.into())
    }

    pub fn pattern(pattern: Regex) -> Self {
        Matcher::Pattern(pattern)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Node) -> bool + 'static,
    {
        Matcher::Predicate(Box::new(predicate))
    }

    /// Matches nodes satisfying every element of `matchers`.
    pub fn all<I, M>(matchers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Matcher>,
    {
        Matcher::All(matchers.into_iter().map(Into::into).collect())
    }

    /// Matches nodes satisfying at least one element of `matchers`.
    pub fn any<I, M>(matchers: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Matcher>,
    {
        Matcher::Any(matchers.into_iter().map(Into::into).collect())
    }

    pub fn is_match(&self, node: &Node) -> bool {
        match self {
            Matcher::Substring(value) => node.base_name().contains(value.as_str()),
            Matcher::Pattern(pattern) => pattern.is_match(&node.base_name()),
            Matcher::Predicate(predicate) => predicate(node),
            Matcher::All(matchers) => matchers.iter().all(|matcher| matcher.is_match(node)),
            Matcher::Any(matchers) => matchers.iter().any(|matcher| matcher.is_match(node)),
        }
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Matcher::substring(value)
    }
}

impl From<String> for Matcher {
    fn from(value: String) -> Self {
        Matcher::Substring(value)
    }
}

impl From<Regex> for Matcher {
    fn from(pattern: Regex) -> Self {
        Matcher::Pattern(pattern)
    }
}
