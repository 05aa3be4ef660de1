use itertools::Itertools;

/// A ranking of candidates, most preferred first.
pub type Pref = Vec<usize>;

pub fn identity(candidates: usize) -> Pref {
    (0..candidates).collect()
}

pub fn position_of(p: &[usize], c: usize) -> usize {
    p.iter().position(|&x| x == c).unwrap_or_else(|| panic!("candidate {} missing from {:?}", c, p))
}
pub fn prefers(p: &[usize], c0: usize, c1: usize) -> bool {
    position_of(p, c0) < position_of(p, c1)
}

fn inverse(p: &[usize], candidates: usize) -> Vec<usize> {
    let mut res = vec![0; candidates];
    for (i, c) in p.iter().copied().enumerate() {
        res[c] = i;
    }
    res
}

/// Number of unordered candidate pairs ordered differently by `p0` and `p1`.
pub fn crossing_count(p0: &[usize], p1: &[usize], candidates: usize) -> usize {
    let (inv0, inv1) = (inverse(p0, candidates), inverse(p1, candidates));
    (0..candidates).tuple_combinations().filter(|&(a, b)| (inv0[a] < inv0[b]) != (inv1[a] < inv1[b])).count()
}

pub fn format_pref(p: &[usize]) -> String {
    p.iter().join("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pref_strategy(candidates: usize) -> impl Strategy<Value = Pref> {
        Just(identity(candidates)).prop_shuffle()
    }

    #[test]
    fn test_position_and_prefers() {
        let p = vec![2, 0, 3, 1];
        assert_eq!(position_of(&p, 2), 0);
        assert_eq!(position_of(&p, 1), 3);
        assert!(prefers(&p, 0, 1));
        assert!(!prefers(&p, 1, 3));
    }
    #[test]
    #[should_panic]
    fn test_position_missing_candidate() {
        position_of(&[0, 1, 2], 5);
    }
    #[test]
    fn test_crossing_count_examples() {
        assert_eq!(crossing_count(&[0, 1, 2, 3], &[1, 0, 2, 3], 4), 1);
        assert_eq!(crossing_count(&[0, 1, 2, 3], &[3, 2, 1, 0], 4), 6);
        assert_eq!(crossing_count(&[0, 1, 2], &[1, 2, 0], 3), 2);
    }
    #[test]
    fn test_format_pref() {
        assert_eq!(format_pref(&[0, 2, 1, 3, 4]), "02134");
    }

    proptest! {
        #[test]
        fn crossing_count_symmetric_and_bounded(p0 in pref_strategy(6), p1 in pref_strategy(6)) {
            let n = crossing_count(&p0, &p1, 6);
            prop_assert_eq!(n, crossing_count(&p1, &p0, 6));
            prop_assert!(n <= 6 * 5 / 2);
            prop_assert_eq!(n == 0, p0 == p1);
        }

        #[test]
        fn crossing_count_reversal_is_maximal(p in pref_strategy(5)) {
            let rev: Pref = p.iter().rev().copied().collect();
            prop_assert_eq!(crossing_count(&p, &rev, 5), 5 * 4 / 2);
        }
    }
}
