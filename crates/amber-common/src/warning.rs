//! Serialization warnings with colored terminal output.
//!
//! Warnings are collected rather than printed immediately so the caller can
//! attach them to the snapshot. Identical messages are kept once, in the
//! order they were first added.

use std::collections::HashSet;

use owo_colors::OwoColorize;

/// An append-only, insertion-ordered set of human-readable warnings.
#[derive(Debug, Clone, Default)]
pub struct Warnings {
    messages: Vec<String>,
    seen: HashSet<String>,
}

impl Warnings {
    /// Create an empty warning set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning. Returns `false` if the same message was already
    /// recorded.
    pub fn add(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if !self.seen.insert(message.clone()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Iterate over the warnings in the order they were first added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Number of distinct warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no warning has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether `message` has been recorded.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.seen.contains(message)
    }

    /// Print every warning to stderr in yellow, tagged with `component`.
    ///
    /// # Example
    /// ```ignore
    /// warnings.report("CSSOM");
    /// // [amber CSSOM] ⚠ stylesheet with attributes - [ id: a ] - was not serialized
    /// ```
    pub fn report(&self, component: &str) {
        for message in &self.messages {
            eprintln!("{}", format!("[amber {component}] ⚠ {message}").yellow());
        }
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
