//! Unique identifiers for new resource addresses.

use uuid::Uuid;

/// Source of fresh identifiers. Every call must return a value not returned
/// before by the same generator.
pub trait UidGenerator {
    /// Produce the next identifier.
    fn next_uid(&mut self) -> String;
}

impl<F> UidGenerator for F
where
    F: FnMut() -> String,
{
    fn next_uid(&mut self) -> String {
        self()
    }
}

/// Random v4 UUIDs in simple (hyphenless) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUids;

impl UidGenerator for RandomUids {
    fn next_uid(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic `<prefix><n>` identifiers counting up from zero.
#[derive(Debug, Clone)]
pub struct SequentialUids {
    prefix: String,
    next: u64,
}

impl SequentialUids {
    /// Create a generator producing `prefix0`, `prefix1`, ...
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 0,
        }
    }
}

impl Default for SequentialUids {
    fn default() -> Self {
        Self::new("uid-")
    }
}

impl UidGenerator for SequentialUids {
    fn next_uid(&mut self) -> String {
        let uid = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        uid
    }
}
