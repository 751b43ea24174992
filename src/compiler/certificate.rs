//! Certificate encoders: compositeness as a pair of non-trivial factor
//! witnesses, primality as a Pratt-style certificate with Fermat tests.

use super::clause::{neg, unit};
use super::constraint::{Constraint, Item};
use super::mint::NameMint;
use super::naming::{one_nbit, z};

pub(crate) fn expand_is_composite(target: &str, width: u32, mint: &mut NameMint) -> Vec<Item> {
    let k = mint.next_is_composite();
    let fact1 = format!("IsComposite_Fact1_{}", z(k));
    let fact2 = format!("IsComposite_Fact2_{}", z(k));
    let overflow = format!("IsComposite_Overflow_{}", z(k));

    vec![
        Constraint::Mul {
            a: fact1.clone(),
            b: fact2.clone(),
            result: target.to_string(),
            overflow: overflow.clone(),
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: fact1.clone(),
            value: 0,
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: fact2.clone(),
            value: 0,
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: fact1,
            value: 1,
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: fact2,
            value: 1,
            width,
        }
        .into(),
        Item::Clause(unit(neg(&overflow))),
    ]
}

/// generator not in {0,1} and generator ^ exp mod modulo == 1.
pub(crate) fn expand_fermat_equals_one(
    generator: &str,
    exp: &str,
    modulo: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let result = format!("Fermat_Result_{}", z(mint.next_fermat()));
    vec![
        Constraint::InputNotEquals {
            input: generator.to_string(),
            value: 0,
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: generator.to_string(),
            value: 1,
            width,
        }
        .into(),
        Constraint::PowMod {
            base: generator.to_string(),
            exp: exp.to_string(),
            modulo: modulo.to_string(),
            result: result.clone(),
            width,
        }
        .into(),
        Constraint::InputEquals {
            input: result,
            value: 1,
            width,
        }
        .into(),
    ]
}

/// generator ^ (prime - 1) mod prime == 1, with prime - 1 obtained by
/// solving the adder backwards.
pub(crate) fn expand_fermat_little(
    generator: &str,
    prime: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_fermat_little();
    let minus1 = format!("Fermat_PrimeMinus1_{}", z(k));
    let minus1_overflow = format!("Fermat_PrimeMinus1_Overflow_{}", z(k));
    vec![
        Constraint::Add {
            a: minus1.clone(),
            b: one_nbit(width),
            result: prime.to_string(),
            overflow: minus1_overflow.clone(),
            width,
        }
        .into(),
        Item::Clause(unit(neg(&minus1_overflow))),
        Constraint::FermatEqualsOne {
            generator: generator.to_string(),
            exp: minus1,
            modulo: prime.to_string(),
            width,
        }
        .into(),
    ]
}

/// generator not in {0,1} and generator ^ exp mod modulo != 1.
pub(crate) fn expand_fermat_not_one(
    generator: &str,
    exp: &str,
    modulo: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let result = format!("FermatNot_Result_{}", z(mint.next_fermat_not_one()));
    vec![
        Constraint::InputNotEquals {
            input: generator.to_string(),
            value: 0,
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: generator.to_string(),
            value: 1,
            width,
        }
        .into(),
        Constraint::PowMod {
            base: generator.to_string(),
            exp: exp.to_string(),
            modulo: modulo.to_string(),
            result: result.clone(),
            width,
        }
        .into(),
        Constraint::InputNotEquals {
            input: result,
            value: 1,
            width,
        }
        .into(),
    ]
}

/// Pratt-style primality certificate. Witnesses: `num_primes` candidate
/// primes (the target is candidate 0), a matrix of exponents claiming the
/// factorisation of each candidate minus one, and one generator per
/// candidate for the Fermat obligations.
pub(crate) fn expand_is_prime(
    target: &str,
    width: u32,
    num_primes: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_is_prime();
    let prime = |i: u32| format!("IsPrime_Prime_{}_{}", z(k), z(i as u64));
    let exp_family = |i: u32| format!("IsPrime_Exp_{}_{}", z(k), z(i as u64));
    let exp = |i: u32, j: u32| format!("{}_{}", exp_family(i), z(j as u64));
    let pow_family = |i: u32| format!("IsPrime_PowTemp_{}_{}", z(k), z(i as u64));
    let pow_temp = |i: u32, j: u32| format!("{}_{}", pow_family(i), z(j as u64));
    let pow_overflow =
        |i: u32, j: u32| format!("IsPrime_PowTemp_Overflow_{}_{}_{}", z(k), z(i as u64), z(j as u64));
    let product = |i: u32| format!("IsPrime_Product_{}_{}", z(k), z(i as u64));
    let product_overflow = |i: u32| format!("IsPrime_Product_Overflow_{}_{}", z(k), z(i as u64));
    let plus1 = |i: u32| format!("IsPrime_ProductPlus1_{}_{}", z(k), z(i as u64));
    let plus1_overflow = |i: u32| format!("IsPrime_ProductPlus1_Overflow_{}_{}", z(k), z(i as u64));
    let sum_exp = |i: u32| format!("IsPrime_SumExp_{}_{}", z(k), z(i as u64));
    let sum_exp_overflow = |i: u32| format!("IsPrime_SumExp_Overflow_{}_{}", z(k), z(i as u64));
    let minus1 = |i: u32| format!("IsPrime_PrimeMinus1_{}_{}", z(k), z(i as u64));
    let minus1_overflow = |i: u32| format!("IsPrime_PrimeMinus1_Overflow_{}_{}", z(k), z(i as u64));
    let quot = |i: u32, j: u32| format!("IsPrime_Div_{}_{}_{}", z(k), z(i as u64), z(j as u64));
    let rem = |i: u32, j: u32| format!("IsPrime_Mod_{}_{}_{}", z(k), z(i as u64), z(j as u64));
    let generator = |i: u32| format!("IsPrime_Generator_{}_{}", z(k), z(i as u64));

    let prime_is_small = |i: u32| Constraint::Or {
        lhs: vec![Constraint::InputEquals {
            input: prime(i),
            value: 2,
            width,
        }
        .into()],
        rhs: vec![Constraint::InputEquals {
            input: prime(i),
            value: 3,
            width,
        }
        .into()],
    };

    let mut items = Vec::new();

    // Every candidate prime is outside {0, 1}.
    for i in 0..num_primes {
        items.push(
            Constraint::InputNotEquals {
                input: prime(i),
                value: 0,
                width,
            }
            .into(),
        );
    }
    for i in 0..num_primes {
        items.push(
            Constraint::InputNotEquals {
                input: prime(i),
                value: 1,
                width,
            }
            .into(),
        );
    }

    // pow_temp(i, j) = prime(j) ^ exp(i, j), overflow-free.
    for i in 0..num_primes {
        for j in 0..num_primes {
            items.push(
                Constraint::Pow {
                    base: prime(j),
                    exp: exp(i, j),
                    result: pow_temp(i, j),
                    overflow: pow_overflow(i, j),
                    width,
                }
                .into(),
            );
        }
    }
    for i in 0..num_primes {
        for j in 0..num_primes {
            items.push(Item::Clause(unit(neg(&pow_overflow(i, j)))));
        }
    }

    // product(i) = prod_j pow_temp(i, j), overflow-free.
    for i in 0..num_primes {
        items.push(
            Constraint::Product {
                input: pow_family(i),
                output: product(i),
                overflow: product_overflow(i),
                count: num_primes,
                width,
            }
            .into(),
        );
    }
    for i in 0..num_primes {
        items.push(Item::Clause(unit(neg(&product_overflow(i)))));
    }

    // plus1(i) = product(i) + 1, overflow-free.
    for i in 0..num_primes {
        items.push(
            Constraint::Add {
                a: product(i),
                b: one_nbit(width),
                result: plus1(i),
                overflow: plus1_overflow(i),
                width,
            }
            .into(),
        );
    }
    for i in 0..num_primes {
        items.push(Item::Clause(unit(neg(&plus1_overflow(i)))));
    }

    // sum_exp(i) = sum_j exp(i, j), overflow-free.
    for i in 0..num_primes {
        items.push(
            Constraint::Sum {
                input: exp_family(i),
                output: sum_exp(i),
                overflow: sum_exp_overflow(i),
                count: num_primes,
                width,
            }
            .into(),
        );
    }
    for i in 0..num_primes {
        items.push(Item::Clause(unit(neg(&sum_exp_overflow(i)))));
    }

    // Either a base-case prime, or the claimed factorisation of
    // prime(i) - 1 is non-trivial and reproduces it.
    for i in 0..num_primes {
        let nontrivial = Constraint::And {
            lhs: vec![Constraint::LessThan {
                a: one_nbit(width),
                b: sum_exp(i),
                width,
            }
            .into()],
            rhs: vec![Constraint::Equals {
                a: plus1(i),
                b: prime(i),
                width,
            }
            .into()],
        };
        items.push(
            Constraint::Or {
                lhs: vec![prime_is_small(i).into()],
                rhs: vec![nontrivial.into()],
            }
            .into(),
        );
    }

    // minus1(i) + 1 = prime(i): the adder solved backwards.
    for i in 0..num_primes {
        items.push(
            Constraint::Add {
                a: minus1(i),
                b: one_nbit(width),
                result: prime(i),
                overflow: minus1_overflow(i),
                width,
            }
            .into(),
        );
    }
    for i in 0..num_primes {
        items.push(Item::Clause(unit(neg(&minus1_overflow(i)))));
    }

    // quot(i, j) / rem(i, j): division of prime(i) - 1 by each candidate.
    for i in 0..num_primes {
        for j in 0..num_primes {
            items.push(
                Constraint::DivMod {
                    a: minus1(i),
                    b: prime(j),
                    div: quot(i, j),
                    modulo: rem(i, j),
                    width,
                }
                .into(),
            );
        }
    }

    // Primitive-root obligation for each claimed prime factor: either
    // generator(i) ^ ((prime(i)-1) / prime(j)) is not 1 mod prime(i), or
    // the factor does not occur, or the prime is a base case.
    for i in 0..num_primes {
        for j in 0..num_primes {
            let root_check = Constraint::Or {
                lhs: vec![Constraint::FermatNotOne {
                    generator: generator(i),
                    exp: quot(i, j),
                    modulo: prime(i),
                    width,
                }
                .into()],
                rhs: vec![Constraint::InputEquals {
                    input: exp(i, j),
                    value: 0,
                    width,
                }
                .into()],
            };
            items.push(
                Constraint::Or {
                    lhs: vec![root_check.into()],
                    rhs: vec![prime_is_small(i).into()],
                }
                .into(),
            );
        }
    }

    // Fermat's little theorem for each candidate, unless it is a base case.
    for i in 0..num_primes {
        items.push(
            Constraint::Or {
                lhs: vec![Constraint::FermatLittle {
                    generator: generator(i),
                    prime: prime(i),
                    width,
                }
                .into()],
                rhs: vec![prime_is_small(i).into()],
            }
            .into(),
        );
    }

    // The target is candidate 0.
    items.push(
        Constraint::Equals {
            a: target.to_string(),
            b: prime(0),
            width,
        }
        .into(),
    );

    items
}
