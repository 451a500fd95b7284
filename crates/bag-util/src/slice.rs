//! Order-insensitive slice algebra over hashable elements.
//!
//! [`exclusion`] and [`intersection`] track membership in an `FxHashMap`
//! keyed by element, with a two-bit presence mask (bit 0 = first slice,
//! bit 1 = second).  Their output order follows map iteration and is
//! unspecified; callers that need deterministic order should sort.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

const IN_SOURCE: u8 = 1 << 0;
const IN_REFERENCE: u8 = 1 << 1;

/// Returns true if `target` occurs in `source`.  Linear scan.
pub fn contains<T: PartialEq>(source: &[T], target: &T) -> bool {
    source.iter().any(|element| element == target)
}

/// Splits two slices into (elements only in `source`, elements only in
/// `reference`).  Elements present in both are dropped, duplicates collapse.
pub fn exclusion<T>(source: &[T], reference: &[T]) -> (Vec<T>, Vec<T>)
where
    T: Eq + Hash + Clone,
{
    let presence = presence_map(source, reference);

    let mut only_in_source = Vec::new();
    let mut only_in_reference = Vec::new();
    for (element, mask) in presence {
        match mask {
            IN_SOURCE => only_in_source.push(element),
            IN_REFERENCE => only_in_reference.push(element),
            _ => {}
        }
    }
    (only_in_source, only_in_reference)
}

/// Elements present in both slices, duplicates collapsed.
pub fn intersection<T>(source: &[T], target: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    presence_map(source, target)
        .into_iter()
        .filter(|&(_, mask)| mask == IN_SOURCE | IN_REFERENCE)
        .map(|(element, _)| element)
        .collect()
}

/// De-duplicates a slice, keeping the first occurrence of each element and
/// preserving input order.
pub fn unique<T>(slice: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = FxHashSet::with_capacity_and_hasher(slice.len(), Default::default());
    let mut out = Vec::with_capacity(slice.len());
    for element in slice {
        if seen.insert(element.clone()) {
            out.push(element.clone());
        }
    }
    out
}

fn presence_map<T>(first: &[T], second: &[T]) -> FxHashMap<T, u8>
where
    T: Eq + Hash + Clone,
{
    let mut presence =
        FxHashMap::with_capacity_and_hasher(first.len() + second.len(), Default::default());
    for element in first {
        *presence.entry(element.clone()).or_insert(0) |= IN_SOURCE;
    }
    for element in second {
        *presence.entry(element.clone()).or_insert(0) |= IN_REFERENCE;
    }
    presence
}
