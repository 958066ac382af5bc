use num_bigint::BigUint;
use num_traits::Zero;

/// One node of a parsed version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// A run of digits, leading zeros dropped.
    Number(BigUint),

    /// A lowercase, alias-resolved qualifier. The empty string is the release.
    Token(String),

    /// A nested list, started by '-' between two numbers.
    Group(Vec<Item>),
}

impl Item {
    pub fn number(n: impl Into<BigUint>) -> Self {
        Item::Number(n.into())
    }

    pub fn token(s: &str) -> Self {
        Item::Token(s.to_string())
    }

    /// 0, "" and a list made only of those; trailing null items are dropped by normalize
    pub fn is_null(&self) -> bool {
        Leaves::new(std::slice::from_ref(self)).all(Item::is_null_leaf)
    }

    // only meaningful for numbers and qualifiers, a list is never a leaf
    pub(crate) fn is_null_leaf(&self) -> bool {
        match self {
            Item::Number(n) => n.is_zero(),
            Item::Token(t) => t.is_empty(),
            Item::Group(_) => false,
        }
    }
}

// Nesting depth is only bounded by the input length, so nothing below walks
// the tree recursively.

/// The numbers and qualifiers of a list, depth first, left to right.
pub(crate) struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, Item>>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(items: &'a [Item]) -> Self {
        Self {
            stack: vec![items.iter()],
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<&'a Item> {
        while let Some(items) = self.stack.last_mut() {
            match items.next() {
                None => {
                    self.stack.pop();
                }
                Some(Item::Group(nested)) => self.stack.push(nested.iter()),
                Some(leaf) => return Some(leaf),
            }
        }
        None
    }
}

impl Drop for Item {
    fn drop(&mut self) {
        let Item::Group(items) = self else {
            return;
        };
        let mut pending = std::mem::take(items);
        while let Some(mut item) = pending.pop() {
            if let Item::Group(nested) = &mut item {
                pending.append(nested);
            }
        }
    }
}

pub(crate) fn write_list(f: &mut std::fmt::Formatter<'_>, items: &[Item]) -> std::fmt::Result {
    f.write_str("(")?;
    let mut stack = vec![(items.iter(), true)];
    while let Some((items, first)) = stack.last_mut() {
        let Some(item) = items.next() else {
            f.write_str(")")?;
            stack.pop();
            continue;
        };
        if !*first {
            f.write_str(",")?;
        }
        *first = false;
        match item {
            Item::Number(n) => write!(f, "{n}")?,
            Item::Token(t) => f.write_str(t)?,
            Item::Group(nested) => {
                f.write_str("(")?;
                stack.push((nested.iter(), true));
            }
        }
    }
    Ok(())
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Number(n) => write!(f, "{n}"),
            Item::Token(t) => f.write_str(t),
            Item::Group(items) => write_list(f, items),
        }
    }
}
