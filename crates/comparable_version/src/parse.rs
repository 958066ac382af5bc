use num_bigint::BigUint;
use num_traits::Zero;

use crate::Item;
use crate::VersionKey;
use crate::normalize::normalize;
use crate::qualifier::{expand_shorthand, resolve_alias};

/// Parse any string into a normalized [VersionKey]. Never fails.
pub fn parse(raw: &str) -> VersionKey {
    let version = raw.to_lowercase();
    let key = VersionKey::from_parts(raw.to_string(), scan(&version));
    tracing::trace!(version = raw, canonical = %key, "parsed version");
    key
}

// The lists still open while scanning. A nested list is always the last item
// of its parent and nothing is added to the parent after it, so a child is
// only attached when the scan is finished.
struct OpenLists {
    current: Vec<Item>,
    parents: Vec<Vec<Item>>,
}

impl OpenLists {
    fn new() -> Self {
        Self {
            current: Vec::new(),
            parents: Vec::new(),
        }
    }

    fn push(&mut self, item: Item) {
        self.current.push(item);
    }

    fn open(&mut self) {
        let parent = std::mem::take(&mut self.current);
        self.parents.push(parent);
    }

    // Every parent was normalized right before its child was opened and holds
    // no other list, so adding a non-empty child keeps it normalized and an
    // empty child is a null item that would be trimmed again.
    fn close(self) -> Vec<Item> {
        let mut items = self.current;
        normalize(&mut items);
        for mut parent in self.parents.into_iter().rev() {
            if !items.is_empty() {
                parent.push(Item::Group(items));
            }
            items = parent;
        }
        items
    }
}

fn scan(version: &str) -> Vec<Item> {

    let mut lists = OpenLists::new();

    // last classified char was a digit, separators leave it alone
    let mut digit = false;
    let mut start = 0;

    let mut chars = version.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '.' | '-' => {
                lists.push(field(&version[start..idx], digit));
                start = idx + c.len_utf8();

                if c == '-' && digit {
                    // 1.0-* is 1-*
                    normalize(&mut lists.current);

                    // only "number-number" starts a nested list: 1.1 vs 1-1
                    if chars.peek().is_some_and(|(_, next)| next.is_ascii_digit()) {
                        lists.open();
                    }
                }
            }
            c if c.is_ascii_digit() => {
                if !digit && idx > start {
                    lists.push(qualifier(&version[start..idx], true));
                    start = idx;
                }
                digit = true;
            }
            _ => {
                if digit && idx > start {
                    lists.push(number(&version[start..idx]));
                    start = idx;
                }
                digit = false;
            }
        }
    }

    if start < version.len() {
        lists.push(field(&version[start..], digit));
    }

    lists.close()
}

// an empty field between separators is an explicit 0
fn field(s: &str, digit: bool) -> Item {
    if s.is_empty() {
        Item::Number(BigUint::zero())
    } else if digit {
        number(s)
    } else {
        qualifier(s, false)
    }
}

// only ever called on a non-empty run of ascii digits
fn number(digits: &str) -> Item {
    Item::Number(BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default())
}

fn qualifier(s: &str, followed_by_digit: bool) -> Item {
    let s = if followed_by_digit {
        expand_shorthand(s).unwrap_or(s)
    } else {
        s
    };
    Item::Token(resolve_alias(s).to_string())
}

#[cfg(test)]
mod test {

    use super::*;

    fn n(v: u32) -> Item {
        Item::number(v)
    }

    fn t(s: &str) -> Item {
        Item::token(s)
    }

    #[test]
    fn dots() {
        assert_eq!(scan("1.2.3"), vec![n(1), n(2), n(3)]);
        assert_eq!(scan("1..3"), vec![n(1), n(0), n(3)]);
        assert_eq!(scan(".1"), vec![n(0), n(1)]);
    }

    #[test]
    fn hyphen_between_numbers_nests() {
        assert_eq!(scan("1-2"), vec![n(1), Item::Group(vec![n(2)])]);
        assert_eq!(scan("1-2-3"), vec![n(1), Item::Group(vec![n(2), Item::Group(vec![n(3)])])]);
    }

    #[test]
    fn hyphen_next_to_letters_is_flat() {
        assert_eq!(scan("1-rc-2"), vec![n(1), t("rc"), n(2)]);
        assert_eq!(scan("rc-2"), vec![t("rc"), n(2)]);
        assert_eq!(scan("1-"), vec![n(1)]);
    }

    #[test]
    fn hyphen_trims_the_list_before_nesting() {
        assert_eq!(scan("1.0.0-2"), vec![n(1), Item::Group(vec![n(2)])]);
        assert_eq!(scan("0-2"), vec![Item::Group(vec![n(2)])]);
    }

    #[test]
    fn digit_letter_boundaries() {
        assert_eq!(scan("1a"), vec![n(1), t("a")]);
        assert_eq!(scan("a1"), vec![t("alpha"), n(1)]);
        assert_eq!(scan("rc1"), vec![t("rc"), n(1)]);
        assert_eq!(scan("1rc1"), vec![n(1), t("rc"), n(1)]);
        assert_eq!(scan("1cr"), vec![n(1), t("rc")]);
    }

    #[test]
    fn shorthand_needs_a_digit() {
        assert_eq!(scan("1-a"), vec![n(1), t("a")]);
        assert_eq!(scan("1-a-1"), vec![n(1), t("a"), n(1)]);
        assert_eq!(scan("1-b2"), vec![n(1), t("beta"), n(2)]);
        assert_eq!(scan("1-c2"), vec![n(1), t("c"), n(2)]);
    }

    #[test]
    fn digit_runs_are_numbers() {
        assert_eq!(number("0"), n(0));
        assert_eq!(number("007"), n(7));
        assert_eq!(scan("1.007-008"), vec![n(1), n(7), Item::Group(vec![n(8)])]);
    }

    #[test]
    fn big_numbers() {
        let big = "123456789012345678901234567890";
        let expected = BigUint::parse_bytes(big.as_bytes(), 10).map(Item::Number);
        assert_eq!(scan(big).first().cloned(), expected);
    }

    #[test]
    fn multibyte_chars() {
        assert_eq!(scan("1-ü-2"), vec![n(1), t("ü"), n(2)]);
        assert_eq!(scan("ß1"), vec![t("ß"), n(1)]);
    }
}
