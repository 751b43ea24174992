//! Single-bit building blocks, each emitted as the canonical truth-table CNF
//! for the gate it encodes. These are the leaves every multi-bit constructor
//! bottoms out in.

use super::clause::{clause, neg, pos};

/// r <-> a AND b.
pub fn and_bit(a: &str, b: &str, r: &str) -> Vec<String> {
    vec![
        clause(&[pos(a), pos(b), neg(r)]),
        clause(&[pos(a), neg(b), neg(r)]),
        clause(&[neg(a), pos(b), neg(r)]),
        clause(&[neg(a), neg(b), pos(r)]),
    ]
}

/// r <-> a OR b.
pub fn or_bit(a: &str, b: &str, r: &str) -> Vec<String> {
    vec![
        clause(&[neg(a), neg(b), pos(r)]),
        clause(&[neg(a), pos(b), pos(r)]),
        clause(&[pos(a), neg(b), pos(r)]),
        clause(&[pos(a), pos(b), neg(r)]),
    ]
}

/// r <-> (a == b).
pub fn equals_bit(a: &str, b: &str, r: &str) -> Vec<String> {
    vec![
        clause(&[pos(a), pos(b), pos(r)]),
        clause(&[pos(a), neg(b), neg(r)]),
        clause(&[neg(a), pos(b), neg(r)]),
        clause(&[neg(a), neg(b), pos(r)]),
    ]
}

/// r <-> (a < b), i.e. r <-> (NOT a AND b).
pub fn less_than_bit(a: &str, b: &str, r: &str) -> Vec<String> {
    vec![
        clause(&[pos(a), pos(b), neg(r)]),
        clause(&[pos(a), neg(b), pos(r)]),
        clause(&[neg(a), pos(b), neg(r)]),
        clause(&[neg(a), neg(b), neg(r)]),
    ]
}

/// r <-> (cond ? a : b).
pub fn mux_bit(a: &str, b: &str, cond: &str, r: &str) -> Vec<String> {
    vec![
        clause(&[neg(cond), neg(a), pos(r)]),
        clause(&[neg(cond), pos(a), neg(r)]),
        clause(&[pos(cond), neg(b), pos(r)]),
        clause(&[pos(cond), pos(b), neg(r)]),
    ]
}

/// carry_out <-> majority(a, b, carry_in): the carry is set exactly when at
/// least two of the three inputs are set.
pub fn carry_out_bit(a: &str, b: &str, carry_in: &str, carry_out: &str) -> Vec<String> {
    vec![
        clause(&[neg(a), neg(b), neg(carry_in), pos(carry_out)]),
        clause(&[neg(a), neg(b), pos(carry_in), pos(carry_out)]),
        clause(&[neg(a), pos(b), neg(carry_in), pos(carry_out)]),
        clause(&[neg(a), pos(b), pos(carry_in), neg(carry_out)]),
        clause(&[pos(a), neg(b), neg(carry_in), pos(carry_out)]),
        clause(&[pos(a), neg(b), pos(carry_in), neg(carry_out)]),
        clause(&[pos(a), pos(b), neg(carry_in), neg(carry_out)]),
        clause(&[pos(a), pos(b), pos(carry_in), neg(carry_out)]),
    ]
}

/// r <-> a XOR b XOR carry_in: the sum bit of a full adder.
pub fn sum_bit(a: &str, b: &str, carry_in: &str, r: &str) -> Vec<String> {
    vec![
        clause(&[neg(a), neg(b), neg(carry_in), pos(r)]),
        clause(&[neg(a), neg(b), pos(carry_in), neg(r)]),
        clause(&[neg(a), pos(b), neg(carry_in), neg(r)]),
        clause(&[neg(a), pos(b), pos(carry_in), pos(r)]),
        clause(&[pos(a), neg(b), neg(carry_in), neg(r)]),
        clause(&[pos(a), neg(b), pos(carry_in), pos(r)]),
        clause(&[pos(a), pos(b), neg(carry_in), pos(r)]),
        clause(&[pos(a), pos(b), pos(carry_in), neg(r)]),
    ]
}

/// A complete 1-bit full adder: a + b + carry_in == (r, carry_out).
pub fn full_adder(a: &str, b: &str, carry_in: &str, r: &str, carry_out: &str) -> Vec<String> {
    let mut clauses = carry_out_bit(a, b, carry_in, carry_out);
    clauses.extend(sum_bit(a, b, carry_in, r));
    clauses
}
