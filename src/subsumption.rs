/// Shared index-based "dominated, drop the redundant one" filter, used by
/// both TD-level subsumption (§4.2) and selector-level subsumption (§4.5).
///
/// `subsumed_by(a, b)` must report whether `a` is dominated by `b`; the two
/// call sites pass opposite containment directions (see §9's "Subsumption
/// direction inversion"), but the drop rule itself is identical: an item is
/// removed when it is subsumed by another and the relation is not mutual, or
/// when the relation is mutual and this item has the larger index.
pub(crate) fn filter_dominated<T>(items: Vec<T>, subsumed_by: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let n = items.len();
    let mut removed = vec![false; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if subsumed_by(&items[i], &items[j]) {
                let mutual = subsumed_by(&items[j], &items[i]);
                if !mutual || i > j {
                    removed[i] = true;
                    break;
                }
            }
        }
    }
    items
        .into_iter()
        .zip(removed)
        .filter(|(_, removed)| !*removed)
        .map(|(item, _)| item)
        .collect()
}
