//! Proof by exhaustion for the three-voter lemma: for every single-crossing
//! profile (id, sigma1, sigma2) over four candidates and every alternative c2,
//! the linear system below must be unsatisfiable.
//!
//! Variables r_v_c are the (real) costs voter v assigns to candidate c. Each
//! voter's top choice costs 0 and costs are non-decreasing along the voter's
//! ranking. The lemma's condition asks that for every pair c, c1,
//! r_1_c + r_2_c + r_2_c1 + r_3_c1 >= 1 + r_1_c2 + r_2_c2 + r_3_c2.

use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::info;
use z3::ast::{Ast, Real};
use z3::{Context, SatResult, Solver};

use crate::error::{Error, Result};
use crate::pref::{prefers, Pref};

const CANDIDATES: usize = 4;
const VOTERS: usize = 3;

fn orders() -> impl Iterator<Item = Pref> {
    (1..=CANDIDATES).permutations(CANDIDATES)
}

/// Is (id, sigma1, sigma2) single-crossing? Once sigma1 has swapped a pair
/// relative to the identity, sigma2 may not swap it back.
pub fn is_single_crossing(sigma1: &[usize], sigma2: &[usize]) -> bool {
    (1..=CANDIDATES).tuple_combinations().all(|(a, b)| !(prefers(sigma1, b, a) && prefers(sigma2, a, b)))
}

/// All single-crossing profiles (sigma1, sigma2), in lexicographic order.
pub fn single_crossing_profiles() -> Vec<(Pref, Pref)> {
    orders().cartesian_product(orders().collect_vec()).filter(|(s1, s2)| is_single_crossing(s1, s2)).collect()
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum Verdict {
    Unsat,
    Sat(String),
    Unknown,
}

fn check_system(sigma1: &[usize], sigma2: &[usize], alternative: usize) -> Verdict {
    let context = Context::new(&Default::default());
    let r: BTreeMap<(usize, usize), Real> = (1..=VOTERS)
        .cartesian_product(1..=CANDIDATES)
        .map(|(v, c)| ((v, c), Real::new_const(&context, format!("r_{}_{}", v, c))))
        .collect();
    let (zero, one) = (Real::from_real(&context, 0, 1), Real::from_real(&context, 1, 1));

    let s = Solver::new(&context);
    let id: Pref = (1..=CANDIDATES).collect();
    for (v, order) in [&id[..], sigma1, sigma2].into_iter().enumerate() {
        let v = v + 1;
        s.assert(&r[&(v, order[0])]._eq(&zero));
        for (a, b) in order.iter().copied().tuple_windows() {
            s.assert(&r[&(v, a)].le(&r[&(v, b)]));
        }
    }
    let rhs = Real::add(&context, &[&one, &r[&(1, alternative)], &r[&(2, alternative)], &r[&(3, alternative)]]);
    for (c, c1) in (1..=CANDIDATES).cartesian_product(1..=CANDIDATES) {
        let lhs = Real::add(&context, &[&r[&(1, c)], &r[&(2, c)], &r[&(2, c1)], &r[&(3, c1)]]);
        s.assert(&lhs.ge(&rhs));
    }

    match s.check() {
        SatResult::Unsat => Verdict::Unsat,
        SatResult::Sat => Verdict::Sat(s.get_model().map(|m| m.to_string()).unwrap_or_default()),
        SatResult::Unknown => Verdict::Unknown,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LpReport {
    pub profiles: usize,
    pub systems: usize,
}

#[derive(Debug)]
pub enum LpOutcome {
    AllUnsat(LpReport),
    Satisfiable { sigma1: Pref, sigma2: Pref, alternative: usize, model: String },
}

pub fn run_lp() -> Result<LpOutcome> {
    let mut report = LpReport { profiles: 0, systems: 0 };
    for (sigma1, sigma2) in single_crossing_profiles() {
        report.profiles += 1;
        info!("Processing profile {}", report.profiles);
        for alternative in 1..=CANDIDATES {
            report.systems += 1;
            match check_system(&sigma1, &sigma2, alternative) {
                Verdict::Unsat => {}
                Verdict::Sat(model) => return Ok(LpOutcome::Satisfiable { sigma1, sigma2, alternative, model }),
                Verdict::Unknown => return Err(Error::SolverUnknown { profile: report.profiles, alternative }),
            }
        }
    }
    Ok(LpOutcome::AllUnsat(report))
}

#[test]
fn test_single_crossing_profile_count() {
    let profiles = single_crossing_profiles();
    assert_eq!(profiles.len(), 151);
    assert_eq!(profiles[0], (vec![1, 2, 3, 4], vec![1, 2, 3, 4]));
    assert!(profiles.contains(&(vec![2, 1, 3, 4], vec![4, 3, 2, 1])));
}
#[test]
fn test_is_single_crossing() {
    assert!(is_single_crossing(&[1, 2, 3, 4], &[4, 3, 2, 1]));
    assert!(is_single_crossing(&[2, 1, 3, 4], &[2, 1, 4, 3]));
    assert!(!is_single_crossing(&[2, 1, 3, 4], &[1, 2, 3, 4]));
}
#[test]
fn test_identity_profile_is_unsat() {
    let id = [1, 2, 3, 4];
    for alternative in 1..=CANDIDATES {
        assert_eq!(check_system(&id, &id, alternative), Verdict::Unsat);
    }
}
