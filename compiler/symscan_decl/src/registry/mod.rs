//! Insertion-ordered, deduplicating symbol registry.
//!
//! The first declaration of a name wins; later ones are dropped. The
//! registry holds at most [`MAX_SYMBOLS`] entries and drops the rest.
//! Neither case is an error: [`SymbolRegistry::insert`] reports what
//! happened and callers decide whether to care.

use rustc_hash::FxHashSet;

/// Capacity of the registry.
pub const MAX_SYMBOLS: usize = 100;

/// Display fingerprint of a name, in `0..100`.
///
/// Rolling polynomial `h = h * 31 + byte` over the name's bytes with
/// wrapping `i32` arithmetic, reduced to `|h| mod 100`. Display only;
/// never used as a lookup key.
pub fn fingerprint(name: &str) -> u32 {
    let hash = name
        .bytes()
        .fold(0i32, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(b)));
    // `%` truncates toward zero, so the remainder is in -99..=99.
    (hash % 100).unsigned_abs()
}

/// One recorded declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    /// Type keyword, declarator, `function` or `variable`.
    pub declared_type: String,
    /// Reserved; always empty.
    pub size: String,
    pub hash: u32,
}

/// What [`SymbolRegistry::insert`] did with a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The name is already recorded.
    Duplicate,
    /// The registry already holds [`MAX_SYMBOLS`] entries.
    Full,
}

#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    entries: Vec<SymbolEntry>,
    names: FxHashSet<String>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` with `declared_type` unless it is already present or
    /// the registry is full.
    pub fn insert(&mut self, name: &str, declared_type: &str) -> InsertOutcome {
        if self.names.contains(name) {
            return InsertOutcome::Duplicate;
        }
        if self.entries.len() >= MAX_SYMBOLS {
            return InsertOutcome::Full;
        }
        self.names.insert(name.to_owned());
        self.entries.push(SymbolEntry {
            name: name.to_owned(),
            declared_type: declared_type.to_owned(),
            size: String::new(),
            hash: fingerprint(name),
        });
        InsertOutcome::Inserted
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolRegistry {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
