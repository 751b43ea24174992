//! Formula combinators and the certificate encoders. The certificates are
//! too large to check satisfiability by hand, so these tests pin witness
//! values through propagation where the encoding is functional, and
//! otherwise check the structural contract: witness families, overflow
//! pinning, selector freshness.

use std::collections::{HashMap, HashSet};

use primecnf::compiler::constraint::{expand_to_clauses, Constraint, Item};
use primecnf::compiler::mint::NameMint;
use primecnf::compiler::naming::{bit, z};

use crate::support::{all_satisfied, expand, parse_clause, pin_value, propagate};

#[test]
fn test_add_literal_prepends_to_every_clause() {
    let mut mint = NameMint::new();
    let items = Constraint::AddLiteral {
        literal: "<sel>".into(),
        condition: vec![
            Item::Clause("<x> 0 ".into()),
            Item::Clause("-<y> <z> 0 ".into()),
        ],
    }
    .expand(&mut mint);
    let clauses = expand_to_clauses(items, &mut mint);
    assert_eq!(clauses, vec!["<sel> <x> 0 ", "<sel> -<y> <z> 0 "]);
}

#[test]
fn test_or_condition_wraps_both_branches() {
    let mut mint = NameMint::new();
    let or = Constraint::Or {
        lhs: vec![Item::Clause("<x> 0 ".into())],
        rhs: vec![
            Item::Clause("<y> 0 ".into()),
            Item::Clause("-<w> 0 ".into()),
        ],
    };
    let clauses = expand_to_clauses(vec![Item::Node(or)], &mut mint);
    let choice = format!("Or_Choice_{}", z(1));
    assert_eq!(
        clauses,
        vec![
            format!("<{}> <x> 0 ", choice),
            format!("-<{}> <y> 0 ", choice),
            format!("-<{}> -<w> 0 ", choice),
        ]
    );
}

#[test]
fn test_or_condition_semantics() {
    // (x) OR (y AND NOT w): for every input triple the CNF is satisfiable
    // by some selector value exactly when the disjunction holds.
    let mut mint = NameMint::new();
    let or = Constraint::Or {
        lhs: vec![Item::Clause("<x> 0 ".into())],
        rhs: vec![
            Item::Clause("<y> 0 ".into()),
            Item::Clause("-<w> 0 ".into()),
        ],
    };
    let clauses: Vec<_> = expand_to_clauses(vec![Item::Node(or)], &mut mint)
        .iter()
        .map(|c| parse_clause(c))
        .collect();
    let choice = format!("Or_Choice_{}", z(1));
    for bits in 0..8u32 {
        let x = bits & 1 == 1;
        let y = bits & 2 == 2;
        let w = bits & 4 == 4;
        let satisfiable = [false, true].iter().any(|&sel| {
            let assignment: HashMap<String, bool> = [
                ("x".to_string(), x),
                ("y".to_string(), y),
                ("w".to_string(), w),
                (choice.clone(), sel),
            ]
            .into();
            all_satisfied(&clauses, &assignment)
        });
        assert_eq!(satisfiable, x || (y && !w), "x={} y={} w={}", x, y, w);
    }
}

#[test]
fn test_or_condition_mints_fresh_selectors() {
    let mut mint = NameMint::new();
    for expected in 1..=3u64 {
        let or = Constraint::Or {
            lhs: vec![Item::Clause("<x> 0 ".into())],
            rhs: vec![Item::Clause("<y> 0 ".into())],
        };
        let clauses = expand_to_clauses(vec![Item::Node(or)], &mut mint);
        assert!(clauses[0].starts_with(&format!("<Or_Choice_{}>", z(expected))));
    }
}

#[test]
fn test_and_condition_concatenates() {
    let mut mint = NameMint::new();
    let and = Constraint::And {
        lhs: vec![Item::Clause("<x> 0 ".into())],
        rhs: vec![Item::Clause("<y> 0 ".into())],
    };
    let clauses = expand_to_clauses(vec![Item::Node(and)], &mut mint);
    assert_eq!(clauses, vec!["<x> 0 ", "<y> 0 "]);
}

#[test]
fn test_is_composite_accepts_a_factor_pair() {
    let n = 3;
    let clauses = expand(vec![Constraint::IsComposite {
        target: "target".into(),
        width: n,
    }]);
    let mut assignment = HashMap::new();
    pin_value(&mut assignment, "target", 6, n);
    pin_value(&mut assignment, &format!("IsComposite_Fact1_{}", z(1)), 2, n);
    pin_value(&mut assignment, &format!("IsComposite_Fact2_{}", z(1)), 3, n);
    assert!(propagate(&clauses, &mut assignment));
    assert!(all_satisfied(&clauses, &assignment));
}

#[test]
fn test_is_composite_rejects_a_wrong_factor_pair() {
    let n = 3;
    let clauses = expand(vec![Constraint::IsComposite {
        target: "target".into(),
        width: n,
    }]);
    let mut assignment = HashMap::new();
    pin_value(&mut assignment, "target", 5, n);
    pin_value(&mut assignment, &format!("IsComposite_Fact1_{}", z(1)), 2, n);
    pin_value(&mut assignment, &format!("IsComposite_Fact2_{}", z(1)), 3, n);
    assert!(!propagate(&clauses, &mut assignment));
}

#[test]
fn test_is_composite_rejects_trivial_factors() {
    let n = 3;
    let clauses = expand(vec![Constraint::IsComposite {
        target: "target".into(),
        width: n,
    }]);
    let mut assignment = HashMap::new();
    pin_value(&mut assignment, "target", 6, n);
    pin_value(&mut assignment, &format!("IsComposite_Fact1_{}", z(1)), 1, n);
    pin_value(&mut assignment, &format!("IsComposite_Fact2_{}", z(1)), 6, n);
    // The arithmetic holds but fact1 = 1 falsifies its not-equals clause.
    assert!(!propagate(&clauses, &mut assignment));
}

#[test]
fn test_is_composite_pins_the_multiplication_overflow() {
    let clauses = expand(vec![Constraint::IsComposite {
        target: "target".into(),
        width: 3,
    }]);
    let pinned = vec![(format!("IsComposite_Overflow_{}", z(1)), false)];
    assert!(clauses.contains(&pinned));
}

#[test]
fn test_fermat_little_solves_the_exponent_backwards() {
    // The prime-minus-one witness has no defining assignment of its own:
    // pinning the prime propagates it through the adder.
    let n = 3;
    let clauses = expand(vec![Constraint::FermatLittle {
        generator: "g".into(),
        prime: "p".into(),
        width: n,
    }]);
    let mut assignment = HashMap::new();
    pin_value(&mut assignment, "p", 7, n);
    pin_value(&mut assignment, &primecnf::compiler::naming::one_nbit(n), 1, n);
    assert!(propagate(&clauses, &mut assignment));
    assert_eq!(
        crate::support::read_value(&assignment, &format!("Fermat_PrimeMinus1_{}", z(1)), n),
        Some(6)
    );
}

fn expanded_names(clauses: &[Vec<(String, bool)>]) -> HashSet<String> {
    clauses
        .iter()
        .flatten()
        .map(|(name, _)| name.clone())
        .collect()
}

#[test]
fn test_is_prime_mints_the_witness_families() {
    let n = 2;
    let clauses = expand(vec![Constraint::IsPrime {
        target: "target".into(),
        width: n,
        num_primes: n,
    }]);
    let names = expanded_names(&clauses);

    for i in 0..n {
        assert!(names.contains(&bit(&format!("IsPrime_Prime_{}_{}", z(1), z(i as u64)), 0)));
        assert!(names.contains(&bit(&format!("IsPrime_Generator_{}_{}", z(1), z(i as u64)), 0)));
        assert!(names.contains(&bit(&format!("IsPrime_SumExp_{}_{}", z(1), z(i as u64)), 0)));
        for j in 0..n {
            assert!(names.contains(&bit(
                &format!("IsPrime_Exp_{}_{}_{}", z(1), z(i as u64), z(j as u64)),
                0
            )));
            assert!(names.contains(&bit(
                &format!("IsPrime_Div_{}_{}_{}", z(1), z(i as u64), z(j as u64)),
                0
            )));
        }
    }
}

#[test]
fn test_is_prime_pins_every_intermediate_overflow() {
    let n = 2;
    let clauses = expand(vec![Constraint::IsPrime {
        target: "target".into(),
        width: n,
        num_primes: n,
    }]);
    for i in 0..n as u64 {
        for j in 0..n as u64 {
            let pinned = vec![(
                format!("IsPrime_PowTemp_Overflow_{}_{}_{}", z(1), z(i), z(j)),
                false,
            )];
            assert!(clauses.contains(&pinned), "i={} j={}", i, j);
        }
        for family in [
            "IsPrime_Product_Overflow",
            "IsPrime_ProductPlus1_Overflow",
            "IsPrime_SumExp_Overflow",
            "IsPrime_PrimeMinus1_Overflow",
        ] {
            let pinned = vec![(format!("{}_{}_{}", family, z(1), z(i)), false)];
            assert!(clauses.contains(&pinned), "{} i={}", family, i);
        }
    }
}

#[test]
fn test_is_prime_ties_the_target_to_candidate_zero() {
    let n = 2;
    let clauses = expand(vec![Constraint::IsPrime {
        target: "target".into(),
        width: n,
        num_primes: n,
    }]);
    let prime0 = format!("IsPrime_Prime_{}_{}", z(1), z(0));
    for i in 0..n {
        let forward = vec![
            (bit("target", i), false),
            (bit(&prime0, i), true),
        ];
        let backward = vec![
            (bit("target", i), true),
            (bit(&prime0, i), false),
        ];
        assert!(clauses.contains(&forward));
        assert!(clauses.contains(&backward));
    }
}

#[test]
fn test_is_prime_selector_count_matches_the_certificate_shape() {
    // Per candidate: one small-prime disjunction plus its outer wrap; per
    // candidate pair: the primitive-root obligation uses three selectors;
    // per candidate: the Fermat obligation uses two more.
    let n = 2u64;
    let clauses = expand(vec![Constraint::IsPrime {
        target: "target".into(),
        width: n as u32,
        num_primes: n as u32,
    }]);
    let selectors: HashSet<String> = expanded_names(&clauses)
        .into_iter()
        .filter(|name| name.starts_with("Or_Choice_"))
        .collect();
    assert_eq!(selectors.len() as u64, 2 * n + 3 * n * n + 2 * n);
}
