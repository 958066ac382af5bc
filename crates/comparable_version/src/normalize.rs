use crate::Item;

/// Drop the trailing null items of one list.
///
/// Scanning backwards: null items are removed, non-null lists are stepped over,
/// and the first non-null number or qualifier stops the scan. Nested lists are
/// not touched, use [normalize_tree] for that.
pub fn normalize(items: &mut Vec<Item>) {
    trim(items, Item::is_null);
}

fn trim(items: &mut Vec<Item>, is_null: impl Fn(&Item) -> bool) {
    let mut idx = items.len();
    while idx > 0 {
        idx -= 1;
        if is_null(&items[idx]) {
            items.remove(idx);
        } else if !matches!(items[idx], Item::Group(_)) {
            break;
        }
    }
}

// A normalized list is null only when it is empty.
fn is_null_normalized(item: &Item) -> bool {
    match item {
        Item::Group(items) => items.is_empty(),
        leaf => leaf.is_null_leaf(),
    }
}

/// Normalize every nested list, innermost first, then the list itself.
pub fn normalize_tree(items: &mut Vec<Item>) {

    // lists being rebuilt, each with the items still to visit
    let mut stack = vec![(Vec::new(), std::mem::take(items).into_iter())];

    while let Some((done, rest)) = stack.last_mut() {
        if let Some(mut item) = rest.next() {
            if let Item::Group(nested) = &mut item {
                let nested = std::mem::take(nested);
                stack.push((Vec::new(), nested.into_iter()));
            } else {
                done.push(item);
            }
            continue;
        }

        let Some((mut list, _)) = stack.pop() else {
            break;
        };
        trim(&mut list, is_null_normalized);
        match stack.last_mut() {
            Some((parent, _)) => parent.push(Item::Group(list)),
            None => *items = list,
        }
    }
}
