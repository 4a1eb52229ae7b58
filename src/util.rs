//! Sorting and deduplication helpers used by tree construction.
//!
//! [`Tree::from_values`](crate::Tree::from_values) feeds its input through
//! [`dedup`] and then [`merge_sort`] before folding the result into a
//! minimal-height tree. Both helpers are plain functions over `Vec`s so they
//! can be tested (and reused) on their own.

/// Sorts the given values using a recursive, stable merge sort.
///
/// # Examples
///
/// ```
/// use bstree::util::merge_sort;
///
/// assert_eq!(merge_sort(vec![3, 1, 2]), [1, 2, 3]);
/// assert_eq!(merge_sort(Vec::<i32>::new()), []);
/// ```
pub fn merge_sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }
    let right = values.split_off(values.len() / 2);
    merge(merge_sort(values), merge_sort(right))
}

/// Merges two sorted runs, taking from the left run on ties to keep the
/// overall sort stable.
fn merge<T: Ord>(a: Vec<T>, b: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    while let (Some(x), Some(y)) = (a.peek(), b.peek()) {
        if x <= y {
            merged.push(a.next().expect("peeked above"));
        } else {
            merged.push(b.next().expect("peeked above"));
        }
    }

    // At most one of these still has items.
    merged.extend(a);
    merged.extend(b);
    merged
}

/// Removes duplicate values, keeping the first occurrence of each.
///
/// The relative order of survivors is preserved, though callers that go on to
/// sort the result (as tree construction does) don't rely on that.
///
/// # Examples
///
/// ```
/// use bstree::util::dedup;
///
/// assert_eq!(dedup(vec![2, 1, 2, 3, 1]), [2, 1, 3]);
/// ```
pub fn dedup<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_orders_arbitrary_input() {
        assert_eq!(merge_sort(vec![5, 3, 8, 1, 9, 2]), [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn sort_handles_tiny_inputs() {
        assert_eq!(merge_sort(Vec::<i32>::new()), []);
        assert_eq!(merge_sort(vec![7]), [7]);
    }

    #[test]
    fn sort_is_stable() {
        // Compare only on the first field so equal keys are distinguishable.
        #[derive(Debug, PartialEq, Eq)]
        struct Keyed(u8, &'static str);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let sorted = merge_sort(vec![Keyed(1, "a"), Keyed(0, "b"), Keyed(1, "c")]);
        assert_eq!(sorted, [Keyed(0, "b"), Keyed(1, "a"), Keyed(1, "c")]);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        assert_eq!(dedup(vec![1, 1, 1]), [1]);
        assert_eq!(dedup(vec![4, 2, 4, 2, 9]), [4, 2, 9]);
    }
}
