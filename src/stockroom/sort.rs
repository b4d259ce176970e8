use crate::item::Item;

/// Stable merge sort over items, ascending by `id`.
///
/// Splits the input in half, sorts each half recursively, and merges the
/// two ascending runs. Equal keys keep their relative order because the
/// merge takes from the left run first. O(n log n) time, O(n) auxiliary
/// space per merge.
pub fn sort_by_id(mut items: Vec<Item>) -> Vec<Item> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    merge(sort_by_id(items), sort_by_id(right))
}

/// First id that appears more than once in an id-sorted sequence, if any.
pub fn first_duplicate_id(items: &[Item]) -> Option<i64> {
    items
        .windows(2)
        .find(|pair| pair[0].id == pair[1].id)
        .map(|pair| pair[0].id)
}

fn merge(left: Vec<Item>, right: Vec<Item>) -> Vec<Item> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut next_left = left.next();
    let mut next_right = right.next();

    loop {
        match (next_left.take(), next_right.take()) {
            (Some(l), Some(r)) => {
                // <= keeps the sort stable: ties drain the left run first.
                if l.id <= r.id {
                    merged.push(l);
                    next_left = left.next();
                    next_right = Some(r);
                } else {
                    merged.push(r);
                    next_right = right.next();
                    next_left = Some(l);
                }
            }
            (Some(l), None) => {
                merged.push(l);
                merged.extend(left);
                break;
            }
            (None, Some(r)) => {
                merged.push(r);
                merged.extend(right);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> Item {
        Item::parse(&id.to_string(), "1", name, "A1", "test").unwrap()
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn sorts_empty_and_singleton() {
        assert!(sort_by_id(Vec::new()).is_empty());
        let sorted = sort_by_id(vec![item(3, "only")]);
        assert_eq!(ids(&sorted), vec![3]);
    }

    #[test]
    fn sorts_ascending_by_id() {
        let input = vec![item(4, "d"), item(1, "a"), item(3, "c"), item(2, "b")];
        let sorted = sort_by_id(input);
        assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorts_reverse_sorted_input() {
        let input: Vec<Item> = (0..10).rev().map(|i| item(i, "x")).collect();
        let sorted = sort_by_id(input);
        assert_eq!(ids(&sorted), (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn preserves_every_element() {
        let input = vec![item(9, "a"), item(2, "b"), item(7, "c"), item(2, "d")];
        let sorted = sort_by_id(input.clone());
        assert_eq!(sorted.len(), input.len());
        for original in &input {
            assert!(sorted.contains(original));
        }
    }

    #[test]
    fn equal_ids_keep_input_order() {
        let input = vec![item(1, "first"), item(1, "second"), item(0, "zero")];
        let sorted = sort_by_id(input);
        assert_eq!(sorted[0].name, "zero");
        assert_eq!(sorted[1].name, "first");
        assert_eq!(sorted[2].name, "second");
    }

    #[test]
    fn finds_first_duplicate_in_sorted_run() {
        let sorted = sort_by_id(vec![item(2, "a"), item(1, "b"), item(2, "c")]);
        assert_eq!(first_duplicate_id(&sorted), Some(2));

        let unique = sort_by_id(vec![item(2, "a"), item(1, "b"), item(3, "c")]);
        assert_eq!(first_duplicate_id(&unique), None);
    }
}
