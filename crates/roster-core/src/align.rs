//! Order-preserving sequence alignment.
//!
//! Pairs up the elements of two ordered lists taken from consecutive versions
//! so callers can tell kept, removed and added members apart positionally.
//! The alignment is a minimal add/remove edit script derived from a classic
//! longest-common-subsequence table.
//!
//! ## Tie-breaking
//!
//! When dropping an element of the previous list and taking an element of the
//! current list are equally minimal, the removal is emitted first. Matching
//! equal heads is always preferred. Duplicate elements are therefore matched
//! left to right.

use std::collections::BTreeMap;

/// One step of an alignment between a previous and a current list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aligned<T> {
    /// Present in both lists at corresponding positions
    Both(T, T),
    /// Present only in the previous list
    Removed(T),
    /// Present only in the current list
    Added(T),
}

impl<T> Aligned<T> {
    /// Previous side of the pair, if present
    pub fn previous(&self) -> Option<&T> {
        match self {
            Aligned::Both(prev, _) | Aligned::Removed(prev) => Some(prev),
            Aligned::Added(_) => None,
        }
    }

    /// Current side of the pair, if present
    pub fn current(&self) -> Option<&T> {
        match self {
            Aligned::Both(_, cur) | Aligned::Added(cur) => Some(cur),
            Aligned::Removed(_) => None,
        }
    }

    /// Convert into a `(previous, current)` pair with absent sides as `None`
    pub fn into_pair(self) -> (Option<T>, Option<T>) {
        match self {
            Aligned::Both(prev, cur) => (Some(prev), Some(cur)),
            Aligned::Removed(prev) => (Some(prev), None),
            Aligned::Added(cur) => (None, Some(cur)),
        }
    }

    /// True when the element is present on both sides
    pub fn is_kept(&self) -> bool {
        matches!(self, Aligned::Both(..))
    }
}

/// Align two ordered lists into a minimal add/remove script.
///
/// Elements equal in both lists and in the same relative order are paired;
/// everything else appears once as `Removed` or `Added`. The output preserves
/// the order of both inputs.
///
/// ```
/// use roster_core::align::{align, Aligned};
///
/// let steps = align(&["a", "b", "c"], &["a", "c"]);
/// assert_eq!(
///     steps,
///     vec![
///         Aligned::Both(&"a", &"a"),
///         Aligned::Removed(&"b"),
///         Aligned::Both(&"c", &"c"),
///     ]
/// );
/// ```
pub fn align<'a, T: PartialEq>(previous: &'a [T], current: &'a [T]) -> Vec<Aligned<&'a T>> {
    let table = LcsTable::build(previous, current);

    let mut steps = Vec::with_capacity(previous.len().max(current.len()));
    let (mut i, mut j) = (0, 0);
    while i < previous.len() && j < current.len() {
        if previous[i] == current[j] {
            steps.push(Aligned::Both(&previous[i], &current[j]));
            i += 1;
            j += 1;
        } else if table.get(i + 1, j) >= table.get(i, j + 1) {
            steps.push(Aligned::Removed(&previous[i]));
            i += 1;
        } else {
            steps.push(Aligned::Added(&current[j]));
            j += 1;
        }
    }
    steps.extend(previous[i..].iter().map(Aligned::Removed));
    steps.extend(current[j..].iter().map(Aligned::Added));
    steps
}

/// Align the key sets of two mappings, ordered by key.
///
/// Each key present in either mapping appears exactly once. Keys present in
/// both come out as `Both`.
pub fn align_keys<'a, K: Ord, V>(
    previous: &'a BTreeMap<K, V>,
    current: &'a BTreeMap<K, V>,
) -> Vec<Aligned<&'a K>> {
    let prev_keys: Vec<&K> = previous.keys().collect();
    let cur_keys: Vec<&K> = current.keys().collect();

    let mut steps: Vec<Aligned<&K>> = align(&prev_keys, &cur_keys)
        .into_iter()
        .map(|step| match step {
            Aligned::Both(prev, cur) => Aligned::Both(*prev, *cur),
            Aligned::Removed(prev) => Aligned::Removed(*prev),
            Aligned::Added(cur) => Aligned::Added(*cur),
        })
        .collect();

    // Removals are emitted ahead of equally-placed additions; restore key order.
    steps.sort_by(|a, b| key_of(a).cmp(key_of(b)));
    steps
}

fn key_of<'a, K>(step: &Aligned<&'a K>) -> &'a K {
    match step {
        Aligned::Both(key, _) | Aligned::Removed(key) | Aligned::Added(key) => *key,
    }
}

/// Suffix LCS lengths: `get(i, j)` is the LCS length of `previous[i..]` and `current[j..]`.
struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build<T: PartialEq>(previous: &[T], current: &[T]) -> Self {
        let width = current.len() + 1;
        let mut cells = vec![0; (previous.len() + 1) * width];
        for i in (0..previous.len()).rev() {
            for j in (0..current.len()).rev() {
                cells[i * width + j] = if previous[i] == current[j] {
                    cells[(i + 1) * width + j + 1] + 1
                } else {
                    cells[(i + 1) * width + j].max(cells[i * width + j + 1])
                };
            }
        }
        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_identical_lists_keeps_everything() {
        let list = [1, 2, 3];
        let steps = align(&list, &list);
        assert!(steps.iter().all(Aligned::is_kept));
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn test_align_removal_in_middle() {
        let steps = align(&['a', 'b', 'c'], &['a', 'c']);
        assert_eq!(
            steps,
            vec![
                Aligned::Both(&'a', &'a'),
                Aligned::Removed(&'b'),
                Aligned::Both(&'c', &'c'),
            ]
        );
    }

    #[test]
    fn test_align_replacement_emits_removal_first() {
        let steps = align(&["x"], &["y"]);
        assert_eq!(steps, vec![Aligned::Removed(&"x"), Aligned::Added(&"y")]);
    }

    #[test]
    fn test_align_empty_sides() {
        let empty: [u8; 0] = [];
        assert!(align(&empty, &empty).is_empty());
        assert_eq!(align(&empty, &[7]), vec![Aligned::Added(&7)]);
        assert_eq!(align(&[7], &empty), vec![Aligned::Removed(&7)]);
    }

    #[test]
    fn test_align_duplicates_match_left_to_right() {
        let steps = align(&["a", "a"], &["a"]);
        assert_eq!(steps, vec![Aligned::Both(&"a", &"a"), Aligned::Removed(&"a")]);
    }

    #[test]
    fn test_align_keys_is_sorted_union() {
        let prev: BTreeMap<&str, u8> = [("b", 1), ("d", 2)].into_iter().collect();
        let cur: BTreeMap<&str, u8> = [("a", 1), ("d", 3)].into_iter().collect();
        let steps = align_keys(&prev, &cur);
        assert_eq!(
            steps,
            vec![
                Aligned::Added(&"a"),
                Aligned::Removed(&"b"),
                Aligned::Both(&"d", &"d"),
            ]
        );
    }

    #[test]
    fn test_into_pair() {
        assert_eq!(Aligned::Both(1, 2).into_pair(), (Some(1), Some(2)));
        assert_eq!(Aligned::Removed(1).into_pair(), (Some(1), None));
        assert_eq!(Aligned::Added(2).into_pair(), (None, Some(2)));
    }
}
