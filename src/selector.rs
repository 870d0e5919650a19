use crate::subset::Subset;
use crate::subsumption::filter_dominated;
use crate::td::TreeDecomposition;

/// One representative bag chosen from each tree decomposition, with
/// redundant bags collapsed (§4.5).
///
/// A selector is the unit the submodular-width LP is built over: each
/// selector contributes one "cover every bag" constraint family, and SUBW is
/// the maximum, over all selectors, of that family's optimum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    bags: Vec<Subset>,
}

impl Selector {
    pub fn bags(&self) -> &[Subset] {
        &self.bags
    }

    /// `true` iff for every bag `b2` of `other` there is a bag `b1` of
    /// `self` with `b1 ⊆ b2` (§4.5): the direction is the opposite of
    /// [`TreeDecomposition::dominated_by`] because SUBW is a max-of-min —
    /// here the *smaller* bag is the stronger one (§9 "Subsumption
    /// direction inversion").
    fn dominated_by(&self, other: &Selector) -> bool {
        other.bags.iter().all(|b2| self.bags.iter().any(|b1| b1.is_subset(*b2)))
    }
}

/// Bag-level filter (§4.5): drops a bag `b1` from a selector's working set
/// when a distinct bag `b2` in the same set satisfies `b2 ⊆ b1`. Exact
/// duplicates keep the earlier-indexed occurrence, matching the
/// input-index tie-break used everywhere else in the core.
fn collapse_covered_bags(bags: Vec<Subset>) -> Vec<Subset> {
    let mut kept = Vec::with_capacity(bags.len());
    'outer: for (i, &bag) in bags.iter().enumerate() {
        for (j, &other) in bags.iter().enumerate() {
            if i == j {
                continue;
            }
            let strictly_smaller = other.is_subset(bag) && other != bag;
            let duplicate_with_lower_index = other == bag && j < i;
            if strictly_smaller || duplicate_with_lower_index {
                continue 'outer;
            }
        }
        kept.push(bag);
    }
    kept.sort_unstable_by_key(|b| b.raw());
    kept.dedup();
    kept
}

/// Enumerates every selector obtainable by choosing one bag from each of
/// `tds` (§4.5): starts from the singleton selectors over the first TD's
/// bags, then for each subsequent TD extends every surviving selector by
/// each of its bags, bag-filters the result, and prunes selector-level
/// subsumption before moving to the next TD — pruning incrementally rather
/// than building the full cross product first is what keeps this
/// tractable.
pub fn enumerate_selectors(tds: &[TreeDecomposition]) -> Vec<Selector> {
    let Some((first, rest)) = tds.split_first() else {
        return vec![Selector { bags: Vec::new() }];
    };

    let mut selectors: Vec<Selector> = first.bags().iter().map(|&b| Selector { bags: vec![b] }).collect();
    selectors = filter_dominated(selectors, Selector::dominated_by);

    for td in rest {
        let mut extended = Vec::with_capacity(selectors.len() * td.bags().len());
        for selector in &selectors {
            for &bag in td.bags() {
                let mut next = selector.bags.clone();
                next.push(bag);
                extended.push(Selector {
                    bags: collapse_covered_bags(next),
                });
            }
        }
        extended.sort_by(|a, b| a.bags.cmp(&b.bags));
        extended.dedup();
        selectors = filter_dominated(extended, Selector::dominated_by);
    }

    selectors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn td(bags: &[&[usize]]) -> TreeDecomposition {
        let encoded: Vec<Subset> = bags.iter().map(|b| Subset::from_indices(b.iter().copied())).collect();
        TreeDecomposition::from_bags(encoded)
    }

    #[test]
    fn single_td_selector_has_one_option_per_bag() {
        let t = td(&[&[0, 1], &[1, 2]]);
        let selectors = enumerate_selectors(&[t]);
        assert_eq!(selectors.len(), 2);
    }

    #[test]
    fn bag_level_subsumption_drops_the_containing_bag() {
        let collapsed = collapse_covered_bags(vec![Subset::from_indices([0]), Subset::from_indices([0, 1])]);
        assert_eq!(collapsed, vec![Subset::from_indices([0])]);
    }

    #[test]
    fn selector_dominated_by_finer_one_is_dropped() {
        let coarse = Selector {
            bags: vec![Subset::from_indices([0, 1])],
        };
        let fine = Selector {
            bags: vec![Subset::from_indices([0])],
        };
        assert!(coarse.dominated_by(&fine));
        assert!(!fine.dominated_by(&coarse));
    }

    #[test]
    fn empty_td_list_yields_one_empty_selector() {
        let selectors = enumerate_selectors(&[]);
        assert_eq!(selectors.len(), 1);
        assert!(selectors[0].bags().is_empty());
    }

    #[test]
    fn two_tds_with_identical_bags_collapse_to_one_selector() {
        let t1 = td(&[&[0, 1]]);
        let t2 = td(&[&[0, 1]]);
        let selectors = enumerate_selectors(&[t1, t2]);
        assert_eq!(selectors.len(), 1);
        assert_eq!(selectors[0].bags(), &[Subset::from_indices([0, 1])]);
    }
}
