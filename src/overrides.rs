// src/overrides.rs
//! Per-country extraction overrides.
//!
//! A handful of country pages break the generic detectors in ways specific to
//! that page. They are listed here by name, each mapped to one of a closed set
//! of extraction variants. The dispatcher consults the registry; it never
//! sniffs content to pick a variant.

use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Area heading is followed by a table, but the areas span several tables.
    MultiTable,
    /// No heading; the first content list mixes protected-area kinds.
    /// Keep only items naming a national park.
    FilteredList,
    /// Area heading is followed by several lists; read all of them.
    AllLists,
    /// As [`Variant::AllLists`], filtered like [`Variant::FilteredList`].
    AllListsFiltered,
    /// The table sits before the area heading, not after it.
    TableBeforeHeading,
    /// Page shared by several countries; this country's areas are in the
    /// table after its own heading rather than in a list.
    ScopedTable,
    /// First column is merged across rows, shifting the name column left on
    /// every row but the first of each group.
    MergedFirstColumn,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::MultiTable => "multi-table",
            Variant::FilteredList => "filtered-list",
            Variant::AllLists => "all-lists",
            Variant::AllListsFiltered => "all-lists-filtered",
            Variant::TableBeforeHeading => "table-before-heading",
            Variant::ScopedTable => "scoped-table",
            Variant::MergedFirstColumn => "merged-first-column",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BUILTIN: &[(&str, Variant)] = &[
    ("Greece", Variant::MultiTable),
    ("Thailand", Variant::MultiTable),
    ("Italy", Variant::MultiTable),
    ("People's Republic of China", Variant::MultiTable),
    ("Nicaragua", Variant::FilteredList),
    ("United Arab Emirates", Variant::FilteredList),
    ("Saudi Arabia", Variant::FilteredList),
    ("Oman", Variant::FilteredList),
    ("Afghanistan", Variant::FilteredList),
    ("Bhutan", Variant::FilteredList),
    ("Guyana", Variant::FilteredList),
    ("Bahamas", Variant::AllLists),
    ("Malaysia", Variant::AllListsFiltered),
    ("South Africa", Variant::TableBeforeHeading),
    ("Poland", Variant::TableBeforeHeading),
    ("Estonia", Variant::ScopedTable),
    ("Latvia", Variant::ScopedTable),
    ("Lithuania", Variant::ScopedTable),
    ("Vietnam", Variant::MergedFirstColumn),
];

/// Country name → variant. Built once before a run; read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct OverrideRegistry {
    entries: HashMap<String, Variant>,
}

impl OverrideRegistry {
    /// The curated table for the live site.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().copied())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Variant)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (s!(k), v)).collect(),
        }
    }

    pub fn lookup(&self, country: &str) -> Option<Variant> {
        self.entries.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookups() {
        let reg = OverrideRegistry::builtin();
        assert_eq!(reg.lookup("Vietnam"), Some(Variant::MergedFirstColumn));
        assert_eq!(reg.lookup("Malaysia"), Some(Variant::AllListsFiltered));
        assert_eq!(reg.lookup("People's Republic of China"), Some(Variant::MultiTable));
        assert_eq!(reg.lookup("Kenya"), None);
        assert_eq!(reg.len(), BUILTIN.len());
    }

    #[test]
    fn names_are_literal() {
        let reg = OverrideRegistry::builtin();
        assert_eq!(reg.lookup("vietnam"), None);
        assert_eq!(reg.lookup("Vietnam "), None);
    }

    #[test]
    fn custom_entries() {
        let reg = OverrideRegistry::from_entries([("Atlantis", Variant::AllLists)]);
        assert_eq!(reg.lookup("Atlantis"), Some(Variant::AllLists));
        assert!(OverrideRegistry::empty().is_empty());
    }
}
