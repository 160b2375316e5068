//! Nearest-index lookup over sorted data.

/// Index pair around a key in ascending-sorted data: `before` is the closest
/// index whose key is at or before the key, `after` the closest at or after.
/// Keys outside the data extent pin both to the nearest end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosestIndexes {
    pub before: usize,
    pub after: usize,
}

/// Locates `key` in `data`, which must be sorted ascending by `x`.
///
/// An exact hit collapses both indexes onto the matching item; a key between
/// two items straddles them.
pub fn closest_item_indexes<T, F>(data: &[T], key: f64, x: &F) -> ClosestIndexes
where
    F: Fn(&T) -> f64,
{
    if data.is_empty() {
        return ClosestIndexes { before: 0, after: 0 };
    }

    // First index whose key is strictly greater.
    let upper = data.partition_point(|item| x(item) <= key);

    if upper == 0 {
        return ClosestIndexes { before: 0, after: 0 };
    }
    if upper == data.len() {
        let last = data.len() - 1;
        return ClosestIndexes {
            before: last,
            after: last,
        };
    }

    if x(&data[upper - 1]) == key {
        ClosestIndexes {
            before: upper - 1,
            after: upper - 1,
        }
    } else {
        ClosestIndexes {
            before: upper - 1,
            after: upper,
        }
    }
}
