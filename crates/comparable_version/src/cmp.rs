use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num_traits::Zero;

use crate::Item;
use crate::item::Leaves;
use crate::VersionKey;
use crate::qualifier::{RELEASE, rank};

/// Total order over two keys.
pub fn compare(a: &VersionKey, b: &VersionKey) -> Ordering {
    compare_lists(a.items(), b.items())
}

pub fn equals(a: &VersionKey, b: &VersionKey) -> bool {
    compare(a, b).is_eq()
}

fn eq_to_none(v: Ordering) -> Option<Ordering> {
    if matches!(v, Ordering::Equal) {
        return None;
    }
    Some(v)
}

// The shorter list is padded with None, which compares as a missing 0, "" or ().
// Two lists compare the same way as an item against padding does, so nested
// lists go on the stack in both cases: padding is just an empty list.
fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {

    let padding: &[Item] = &[];

    // lists being compared, with the next position to look at
    let mut stack = vec![(left, right, 0)];

    while let Some(top) = stack.last_mut() {
        let (left, right, idx) = *top;

        if idx >= std::cmp::max(left.len(), right.len()) {
            stack.pop();
            continue;
        }
        top.2 += 1;

        let ord = match (left.get(idx), right.get(idx)) {
            (Some(Item::Group(l)), Some(Item::Group(r))) => {
                stack.push((l.as_slice(), r.as_slice(), 0));
                continue;
            }
            (Some(Item::Group(l)), None) => {
                stack.push((l.as_slice(), padding, 0));
                continue;
            }
            (None, Some(Item::Group(r))) => {
                stack.push((padding, r.as_slice(), 0));
                continue;
            }
            (Some(l), Some(r)) => compare_items(l, r),
            (Some(l), None) => against_padding(l),
            (None, Some(r)) => against_padding(r).reverse(),
            (None, None) => Ordering::Equal,
        };
        if let Some(ret) = eq_to_none(ord) {
            return ret;
        }
    }

    Ordering::Equal
}

fn leaf_against_padding(leaf: &Item) -> Ordering {
    match leaf {
        Item::Number(n) => {
            if n.is_zero() {
                Ordering::Equal
            } else {
                Ordering::Greater
            }
        }
        Item::Token(t) => rank(t).cmp(&RELEASE),
        Item::Group(_) => Ordering::Equal,
    }
}

// how an item compares to a missing counterpart: a list goes by its first leaf
// that does not tie with padding
fn against_padding(item: &Item) -> Ordering {
    Leaves::new(std::slice::from_ref(item))
        .map(leaf_against_padding)
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

// qualifier < list < number, once both stand on the same side of the release
fn kind_order(item: &Item) -> u8 {
    match item {
        Item::Token(_) => 0,
        Item::Group(_) => 1,
        Item::Number(_) => 2,
    }
}

fn compare_items(left: &Item, right: &Item) -> Ordering {

    // two lists on different sides of the release already differ at the first
    // position where either of them holds something
    if let (Item::Group(l), Item::Group(r)) = (left, right) {
        return compare_lists(l, r);
    }

    // first: which side of the release each item is on
    let side = against_padding(left);
    if let Some(ret) = eq_to_none(side.cmp(&against_padding(right))) {
        return ret;
    }

    // 0, "" and () all stand for nothing and tie
    if side.is_eq() {
        return Ordering::Equal;
    }

    match (left, right) {
        (Item::Number(l), Item::Number(r)) => l.cmp(r),
        (Item::Token(l), Item::Token(r)) => rank(l).cmp(&rank(r)),
        _ => kind_order(left).cmp(&kind_order(right)),
    }
}

// Equal keys hold the same non-null numbers and qualifiers in the same order,
// whatever null items and list boundaries sit between them.
pub(crate) fn hash_items<H: Hasher>(items: &[Item], state: &mut H) {
    for leaf in Leaves::new(items).filter(|leaf| !leaf.is_null_leaf()) {
        match leaf {
            Item::Number(n) => {
                state.write_u8(1);
                n.hash(state);
            }
            Item::Token(t) => {
                state.write_u8(2);
                t.hash(state);
            }
            Item::Group(_) => {}
        }
    }
}
