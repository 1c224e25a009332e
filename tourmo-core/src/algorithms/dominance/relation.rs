#[cfg(test)]
#[path = "../../../tests/unit/algorithms/dominance/relation_test.rs"]
mod relation_test;

use crate::utils::Float;

/// Returns true if `p` strictly dominates `q`: `p` is not worse in any component and better in
/// at least one. Lower is better, values are compared exactly. Vectors of different length are
/// not comparable, so `false` is returned for them.
pub fn dominates<T>(p: &T, q: &T) -> bool
where
    T: AsRef<[Float]> + ?Sized,
{
    let (p, q) = (p.as_ref(), q.as_ref());
    if p.len() != q.len() {
        return false;
    }

    let mut is_better_in_one = false;

    for (&p_value, &q_value) in p.iter().zip(q.iter()) {
        if p_value > q_value {
            return false;
        }

        if p_value < q_value {
            is_better_in_one = true;
        }
    }

    is_better_in_one
}

/// Returns true if `p` weakly dominates `q`: `p` is not worse in any component. Returns false
/// when vectors have different length.
pub fn weakly_dominates<T>(p: &T, q: &T) -> bool
where
    T: AsRef<[Float]> + ?Sized,
{
    let (p, q) = (p.as_ref(), q.as_ref());

    p.len() == q.len() && p.iter().zip(q.iter()).all(|(p_value, q_value)| p_value <= q_value)
}
