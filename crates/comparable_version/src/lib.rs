// comparable version
//
// --- General rules ---
//
// 1. Nothing is rejected. Every string parses, empty fields are an implicit 0.
// 2. Trailing zeros and release qualifiers do not count:   1 == 1.0 == 1-ga == 1.final.0
// 3. Pre-release qualifiers are LESS than the release:     1-alpha < 1-rc < 1-snapshot < 1
// 4. Post-release and unknown qualifiers are GREATER:      1 < 1-sp < 1-abc < 1-xyz
// 5. At the same position a number beats a '-' group, and a group beats a qualifier
//    example: 1-xxxxx < 1-1 < 1.1
//
// --- Parsing ---
//
// The string is lowercased and scanned left to right.
//
//   '.'   ends an item in the current list
//   '-'   ends an item; if the item was numeric and the next char is a digit,
//         a new nested list is started (this is what separates 1.1 from 1-1)
//   a digit/letter boundary ends an item without opening a list
//
//   1.0-1-alpha-1   -> (1,(1,alpha,1))
//   1.1-1.1-1.1     -> (1,1,(1,1,(1,1)))
//   1....1          -> (1,0,0,0,1)
//
// A single letter directly followed by a digit is a shorthand:
//
//   a1 -> alpha 1
//   b1 -> beta 1
//   m1 -> milestone 1
//
// Aliases, resolved once at parse time:
//
//   ga, final, release -> ""   (the release itself)
//   cr                 -> rc
//
// --- Normalizing ---
//
// Every list, innermost first, loses its trailing null items (0, "", empty list).
// Non-empty nested lists are stepped over, a non-null number or qualifier stops the trim.
//
//   1.0.0         -> (1)
//   final.0.0     -> ()
//   1-0.final.ga  -> (1)
//
// --- Comparing ---
//
// Lists compare item by item. A missing item on the shorter side is padding, and every
// item knows how it compares to padding:
//
//   number     0 == padding, anything else is greater
//   qualifier  alpha < beta < milestone < rc < snapshot < padding("") < sp < unknown...
//   list       compares each of its items to padding, first difference wins
//
// Two items at the same position compare by
//
//   1. where they stand relative to padding (less, equal, greater)
//   2. items equal to padding are equal to each other   (1.0.1 == 1.ga.1)
//   3. by kind:  qualifier < list < number
//   4. by value: numeric, qualifier rank, or recursively for lists
//
// Unknown qualifiers are ordered after every known one, and among themselves
// in plain string order (xx < xxx < y).

mod cmp;
mod item;
mod normalize;
mod parse;
mod qualifier;

pub use cmp::{compare, equals};
pub use item::Item;
pub use normalize::{normalize, normalize_tree};
pub use parse::parse;
pub use qualifier::{QUALIFIERS, Rank};

/// A parsed and normalized version string.
///
/// The key remembers the string it was built from, but ordering and equality
/// only look at the normalized items: `"1.0"`, `"1"` and `"1-ga"` are all equal.
#[derive(Debug, Clone)]
pub struct VersionKey {
    raw: String,
    items: Vec<Item>,
}

impl VersionKey {
    pub fn parse(raw: &str) -> Self {
        parse::parse(raw)
    }

    /// Build a key from hand made items. The tree is normalized innermost first,
    /// the same way the parser does it.
    pub fn from_items(raw: impl Into<String>, mut items: Vec<Item>) -> Self {
        normalize_tree(&mut items);
        Self {
            raw: raw.into(),
            items,
        }
    }

    // items are already normalized
    pub(crate) fn from_parts(raw: String, items: Vec<Item>) -> Self {
        Self { raw, items }
    }

    /// The input string as given.
    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// The normalized items of the root list.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Canonical rendering of the item tree, "1.0-1" -> "(1,(1))"
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for VersionKey {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl Eq for VersionKey {}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare(self, other)
    }
}

impl std::hash::Hash for VersionKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        cmp::hash_items(&self.items, state);
    }
}

impl std::fmt::Display for VersionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        item::write_list(f, &self.items)
    }
}

impl std::str::FromStr for VersionKey {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for VersionKey {
    fn from(s: &str) -> Self {
        parse(s)
    }
}
