#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dominance/front_test.rs"]
mod front_test;

use super::dominates;
use crate::utils::Float;

/// Extracts the non-dominated front from `solutions` using incremental insertion.
///
/// Each candidate is compared against the current front: it is discarded as soon as a member
/// dominates it, otherwise every member it dominates is removed and the candidate is inserted.
/// Identical vectors never dominate each other, so duplicates are all kept. Time complexity is
/// `O(K * N^2)`, where `K` is the number of objectives and `N` the number of solutions.
pub fn extract_non_dominated_front<T>(solutions: &[T]) -> Vec<T>
where
    T: AsRef<[Float]> + Clone,
{
    let mut front: Vec<T> = Vec::with_capacity(solutions.len());

    for candidate in solutions {
        let mut is_dominated = false;

        let mut idx = 0;
        while idx < front.len() {
            if dominates(&front[idx], candidate) {
                is_dominated = true;
                break;
            }

            // NOTE: do not advance after removal, the next member has shifted into `idx`
            if dominates(candidate, &front[idx]) {
                front.remove(idx);
            } else {
                idx += 1;
            }
        }

        if !is_dominated {
            front.push(candidate.clone());
        }
    }

    front
}
