//! The constraint algebra. A client assembles a list of [`Item`]s; every
//! node rewrites itself into clause strings and further nodes until only
//! strings remain. Auxiliary variables take their suffixes from a
//! [`NameMint`] so distinct expansions of the same constructor never
//! collide.

use super::certificate;
use super::clause::{clause, neg, pos, unit};
use super::gates;
use super::mint::NameMint;
use super::naming::{bit, one_nbit, z, zero_1bit};

/// One element of a constraint list: either a finished clause string or a
/// constraint node still to be expanded.
#[derive(Clone, Debug)]
pub enum Item {
    Clause(String),
    Node(Constraint),
}

impl From<Constraint> for Item {
    fn from(c: Constraint) -> Self {
        Item::Node(c)
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Clause(s)
    }
}

/// A constraint over named Boolean variables. Multi-bit operands are name
/// prefixes; bit i of prefix P is the variable `P_Z(i)`, LSB-first.
#[derive(Clone, Debug)]
pub enum Constraint {
    /// input == value over `width` bits (one unit clause per bit).
    InputEquals { input: String, value: u64, width: u32 },
    /// input != value: a single clause, satisfied when some bit differs.
    InputNotEquals { input: String, value: u64, width: u32 },
    /// a + b == result by ripple carry; overflow <-> the final carry-out.
    Add {
        a: String,
        b: String,
        result: String,
        overflow: String,
        width: u32,
    },
    /// result == (a * bit) << shift, as a 2*width-bit value.
    MulBitShift {
        a: String,
        bit: String,
        result: String,
        shift: u32,
        width: u32,
    },
    /// result_i <-> a_i AND bit, for each of the `width` bits.
    MulBit {
        a: String,
        bit: String,
        result: String,
        width: u32,
    },
    /// a * b == result mod 2^width; overflow <-> the high half of the full
    /// product is nonzero.
    Mul {
        a: String,
        b: String,
        result: String,
        overflow: String,
        width: u32,
    },
    /// a == b * div + modulo with modulo < b. Division by zero is not
    /// excluded here; callers assert b != 0.
    DivMod {
        a: String,
        b: String,
        div: String,
        modulo: String,
        width: u32,
    },
    /// a == b bitwise.
    Equals { a: String, b: String, width: u32 },
    /// a < b, unsigned: strict at the highest disagreeing bit.
    LessThan { a: String, b: String, width: u32 },
    /// result == if cond then a else b, bitwise with a shared condition.
    Mux {
        a: String,
        b: String,
        cond: String,
        result: String,
        width: u32,
    },
    /// result <-> OR of the `width` bits of a.
    OrReduce {
        a: String,
        result: String,
        width: u32,
    },
    /// result's low `width` bits equal a; the high `width` bits are zero.
    ZeroExtend {
        a: String,
        result: String,
        width: u32,
    },
    /// output == input_0 + ... + input_{count-1}; overflow <-> some stage
    /// overflowed.
    Sum {
        input: String,
        output: String,
        overflow: String,
        count: u32,
        width: u32,
    },
    /// output == input_0 * ... * input_{count-1}; overflow <-> some stage
    /// overflowed.
    Product {
        input: String,
        output: String,
        overflow: String,
        count: u32,
        width: u32,
    },
    /// result == base ^ exp by repeated squaring. A squaring overflow only
    /// counts when a higher exponent bit selects that or a later square.
    Pow {
        base: String,
        exp: String,
        result: String,
        overflow: String,
        width: u32,
    },
    /// result == base ^ exp mod modulo, computed on a 2*width-bit lane so
    /// intermediate products stay in range.
    PowMod {
        base: String,
        exp: String,
        modulo: String,
        result: String,
        width: u32,
    },
    /// Prepends a literal to every clause of the condition.
    AddLiteral { literal: String, condition: Vec<Item> },
    /// lhs OR rhs via a fresh selector literal (half-Tseitin: no
    /// equivalence clause for the selector is emitted).
    Or { lhs: Vec<Item>, rhs: Vec<Item> },
    /// lhs AND rhs: clause-list concatenation.
    And { lhs: Vec<Item>, rhs: Vec<Item> },
    /// generator not in {0,1} and generator ^ exp mod modulo == 1.
    FermatEqualsOne {
        generator: String,
        exp: String,
        modulo: String,
        width: u32,
    },
    /// generator ^ (prime - 1) mod prime == 1.
    FermatLittle {
        generator: String,
        prime: String,
        width: u32,
    },
    /// generator not in {0,1} and generator ^ exp mod modulo != 1.
    FermatNotOne {
        generator: String,
        exp: String,
        modulo: String,
        width: u32,
    },
    /// target == fact1 * fact2 for fresh witnesses, both outside {0,1},
    /// with no multiplication overflow.
    IsComposite { target: String, width: u32 },
    /// target carries a Pratt-style primality certificate over
    /// `num_primes` candidate primes.
    IsPrime {
        target: String,
        width: u32,
        num_primes: u32,
    },
}

impl Constraint {
    /// Rewrites this node one level: the returned items are clause strings
    /// and further nodes. Expanding the same node twice yields the same
    /// logical meaning; only minted suffixes differ.
    pub fn expand(&self, mint: &mut NameMint) -> Vec<Item> {
        match self {
            Constraint::InputEquals { input, value, width } => {
                expand_input_equals(input, *value, *width)
            }
            Constraint::InputNotEquals { input, value, width } => {
                expand_input_not_equals(input, *value, *width)
            }
            Constraint::Add {
                a,
                b,
                result,
                overflow,
                width,
            } => expand_add(a, b, result, overflow, *width, mint),
            Constraint::MulBitShift {
                a,
                bit,
                result,
                shift,
                width,
            } => expand_mul_bit_shift(a, bit, result, *shift, *width),
            Constraint::MulBit {
                a,
                bit,
                result,
                width,
            } => expand_mul_bit(a, bit, result, *width),
            Constraint::Mul {
                a,
                b,
                result,
                overflow,
                width,
            } => expand_mul(a, b, result, overflow, *width, mint),
            Constraint::DivMod {
                a,
                b,
                div,
                modulo,
                width,
            } => expand_div_mod(a, b, div, modulo, *width, mint),
            Constraint::Equals { a, b, width } => expand_equals(a, b, *width),
            Constraint::LessThan { a, b, width } => expand_less_than(a, b, *width, mint),
            Constraint::Mux {
                a,
                b,
                cond,
                result,
                width,
            } => expand_mux(a, b, cond, result, *width),
            Constraint::OrReduce { a, result, width } => expand_or_reduce(a, result, *width),
            Constraint::ZeroExtend { a, result, width } => expand_zero_extend(a, result, *width),
            Constraint::Sum {
                input,
                output,
                overflow,
                count,
                width,
            } => expand_sum(input, output, overflow, *count, *width, mint),
            Constraint::Product {
                input,
                output,
                overflow,
                count,
                width,
            } => expand_product(input, output, overflow, *count, *width, mint),
            Constraint::Pow {
                base,
                exp,
                result,
                overflow,
                width,
            } => expand_pow(base, exp, result, overflow, *width, mint),
            Constraint::PowMod {
                base,
                exp,
                modulo,
                result,
                width,
            } => expand_pow_mod(base, exp, modulo, result, *width, mint),
            Constraint::AddLiteral { literal, condition } => {
                let clauses = expand_to_clauses(condition.clone(), mint);
                clauses
                    .into_iter()
                    .map(|c| Item::Clause(format!("{} {}", literal, c)))
                    .collect()
            }
            Constraint::Or { lhs, rhs } => {
                let choice = pos(&format!("Or_Choice_{}", z(mint.next_or_choice())));
                let mut items = Constraint::AddLiteral {
                    literal: choice.clone(),
                    condition: lhs.clone(),
                }
                .expand(mint);
                items.extend(
                    Constraint::AddLiteral {
                        literal: format!("-{}", choice),
                        condition: rhs.clone(),
                    }
                    .expand(mint),
                );
                items
            }
            Constraint::And { lhs, rhs } => {
                let mut items = lhs.clone();
                items.extend(rhs.clone());
                items
            }
            Constraint::FermatEqualsOne {
                generator,
                exp,
                modulo,
                width,
            } => certificate::expand_fermat_equals_one(generator, exp, modulo, *width, mint),
            Constraint::FermatLittle {
                generator,
                prime,
                width,
            } => certificate::expand_fermat_little(generator, prime, *width, mint),
            Constraint::FermatNotOne {
                generator,
                exp,
                modulo,
                width,
            } => certificate::expand_fermat_not_one(generator, exp, modulo, *width, mint),
            Constraint::IsComposite { target, width } => {
                certificate::expand_is_composite(target, *width, mint)
            }
            Constraint::IsPrime {
                target,
                width,
                num_primes,
            } => certificate::expand_is_prime(target, *width, *num_primes, mint),
        }
    }
}

/// Depth-first expansion of a mixed item list all the way down to clause
/// strings. The combinators use this to materialize their sub-conditions
/// before wrapping them.
pub fn expand_to_clauses(items: Vec<Item>, mint: &mut NameMint) -> Vec<String> {
    let mut out = Vec::new();
    for item in items {
        match item {
            Item::Clause(s) => out.push(s),
            Item::Node(node) => out.extend(expand_to_clauses(node.expand(mint), mint)),
        }
    }
    out
}

fn expand_input_equals(input: &str, value: u64, width: u32) -> Vec<Item> {
    (0..width)
        .map(|i| {
            let name = bit(input, i);
            if (value >> i) & 1 == 1 {
                Item::Clause(unit(pos(&name)))
            } else {
                Item::Clause(unit(neg(&name)))
            }
        })
        .collect()
}

fn expand_input_not_equals(input: &str, value: u64, width: u32) -> Vec<Item> {
    // One clause holding, for each bit, the literal falsified by the value:
    // satisfied exactly when the variable differs somewhere.
    let lits: Vec<String> = (0..width)
        .map(|i| {
            let name = bit(input, i);
            if (value >> i) & 1 == 1 {
                neg(&name)
            } else {
                pos(&name)
            }
        })
        .collect();
    vec![Item::Clause(clause(&lits))]
}

fn expand_add(
    a: &str,
    b: &str,
    result: &str,
    overflow: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let carries = format!("Add_Carry_{}", z(mint.next_add()));
    let carry = |i: u32| bit(&carries, i);

    let mut items = Vec::new();
    items.push(Item::Clause(unit(neg(&carry(0)))));
    for i in 0..width {
        items.extend(
            gates::full_adder(&bit(a, i), &bit(b, i), &carry(i), &bit(result, i), &carry(i + 1))
                .into_iter()
                .map(Item::Clause),
        );
    }
    items.push(Item::Clause(clause(&[neg(overflow), pos(&carry(width))])));
    items.push(Item::Clause(clause(&[pos(overflow), neg(&carry(width))])));
    items
}

fn expand_mul_bit_shift(a: &str, bit_in: &str, result: &str, shift: u32, width: u32) -> Vec<Item> {
    let mut items = Vec::new();
    for i in 0..shift {
        items.push(Item::Clause(unit(neg(&bit(result, i)))));
    }
    for i in 0..width {
        items.extend(
            gates::and_bit(&bit(a, i), bit_in, &bit(result, i + shift))
                .into_iter()
                .map(Item::Clause),
        );
    }
    for i in (shift + width)..(2 * width) {
        items.push(Item::Clause(unit(neg(&bit(result, i)))));
    }
    items
}

fn expand_mul_bit(a: &str, bit_in: &str, result: &str, width: u32) -> Vec<Item> {
    let mut items = Vec::new();
    for i in 0..width {
        items.extend(
            gates::and_bit(&bit(a, i), bit_in, &bit(result, i))
                .into_iter()
                .map(Item::Clause),
        );
    }
    items
}

fn expand_mul(
    a: &str,
    b: &str,
    result: &str,
    overflow: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_mul();
    let partial = |i: u32| format!("Mul_Partial_{}_{}", z(k), z(i as u64));
    let acc = |i: u32| format!("Mul_Acc_{}_{}", z(k), z(i as u64));
    let stage_overflow = |i: u32| format!("Mul_StageOverflow_{}_{}", z(k), z(i as u64));

    let mut items = Vec::new();
    for i in 0..width {
        items.push(
            Constraint::MulBitShift {
                a: a.to_string(),
                bit: bit(b, i),
                result: partial(i),
                shift: i,
                width,
            }
            .into(),
        );
    }
    for i in 0..(2 * width) {
        items.push(Item::Clause(unit(neg(&bit(&acc(0), i)))));
    }
    // Per-stage carry-outs at width 2n can never fire; they are left
    // unconstrained beyond their defining clauses.
    for i in 0..width {
        items.push(
            Constraint::Add {
                a: partial(i),
                b: acc(i),
                result: acc(i + 1),
                overflow: stage_overflow(i),
                width: 2 * width,
            }
            .into(),
        );
    }
    for i in 0..width {
        items.push(Item::Clause(clause(&[
            neg(&bit(result, i)),
            pos(&bit(&acc(width), i)),
        ])));
        items.push(Item::Clause(clause(&[
            pos(&bit(result, i)),
            neg(&bit(&acc(width), i)),
        ])));
    }
    let mut high = vec![neg(overflow)];
    for i in 0..width {
        high.push(pos(&bit(&acc(width), i + width)));
    }
    items.push(Item::Clause(clause(&high)));
    for i in 0..width {
        items.push(Item::Clause(clause(&[
            pos(overflow),
            neg(&bit(&acc(width), i + width)),
        ])));
    }
    items
}

fn expand_div_mod(
    a: &str,
    b: &str,
    div: &str,
    modulo: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_div_mod();
    let prod = format!("DivMod_Prod_{}", z(k));
    let mul_overflow = format!("DivMod_MulOverflow_{}", z(k));
    let add_overflow = format!("DivMod_AddOverflow_{}", z(k));

    vec![
        Constraint::Mul {
            a: b.to_string(),
            b: div.to_string(),
            result: prod.clone(),
            overflow: mul_overflow.clone(),
            width,
        }
        .into(),
        Constraint::Add {
            a: prod,
            b: modulo.to_string(),
            result: a.to_string(),
            overflow: add_overflow.clone(),
            width,
        }
        .into(),
        Item::Clause(unit(neg(&mul_overflow))),
        Item::Clause(unit(neg(&add_overflow))),
        Constraint::LessThan {
            a: modulo.to_string(),
            b: b.to_string(),
            width,
        }
        .into(),
    ]
}

fn expand_equals(a: &str, b: &str, width: u32) -> Vec<Item> {
    let mut items = Vec::new();
    for i in 0..width {
        items.push(Item::Clause(clause(&[neg(&bit(a, i)), pos(&bit(b, i))])));
        items.push(Item::Clause(clause(&[pos(&bit(a, i)), neg(&bit(b, i))])));
    }
    items
}

fn expand_less_than(a: &str, b: &str, width: u32, mint: &mut NameMint) -> Vec<Item> {
    let k = mint.next_less_than();
    let equal = format!("LessThan_Equal_{}", z(k));
    let less = format!("LessThan_Less_{}", z(k));
    let equal_prefix = format!("LessThan_EqualPrefix_{}", z(k));
    let strict = format!("LessThan_Strict_{}", z(k));

    let mut items = Vec::new();
    for i in 0..width {
        items.extend(
            gates::equals_bit(&bit(a, i), &bit(b, i), &bit(&equal, i))
                .into_iter()
                .map(Item::Clause),
        );
    }
    for i in 0..width {
        items.extend(
            gates::less_than_bit(&bit(a, i), &bit(b, i), &bit(&less, i))
                .into_iter()
                .map(Item::Clause),
        );
    }
    // The prefix accumulator runs MSB-down: all bits above i are equal.
    items.push(Item::Clause(unit(pos(&bit(&equal_prefix, width)))));
    for i in 0..width {
        items.extend(
            gates::and_bit(&bit(&equal_prefix, i + 1), &bit(&equal, i), &bit(&equal_prefix, i))
                .into_iter()
                .map(Item::Clause),
        );
    }
    for i in 0..width {
        items.extend(
            gates::and_bit(&bit(&equal_prefix, i + 1), &bit(&less, i), &bit(&strict, i))
                .into_iter()
                .map(Item::Clause),
        );
    }
    let firing: Vec<String> = (0..width).map(|i| pos(&bit(&strict, i))).collect();
    items.push(Item::Clause(clause(&firing)));
    items
}

fn expand_mux(a: &str, b: &str, cond: &str, result: &str, width: u32) -> Vec<Item> {
    let mut items = Vec::new();
    for i in 0..width {
        items.extend(
            gates::mux_bit(&bit(a, i), &bit(b, i), cond, &bit(result, i))
                .into_iter()
                .map(Item::Clause),
        );
    }
    items
}

fn expand_or_reduce(a: &str, result: &str, width: u32) -> Vec<Item> {
    let mut long = vec![neg(result)];
    for i in 0..width {
        long.push(pos(&bit(a, i)));
    }
    let mut items = vec![Item::Clause(clause(&long))];
    for i in 0..width {
        items.push(Item::Clause(clause(&[pos(result), neg(&bit(a, i))])));
    }
    items
}

fn expand_zero_extend(a: &str, result: &str, width: u32) -> Vec<Item> {
    let mut items = vec![Constraint::Equals {
        a: a.to_string(),
        b: result.to_string(),
        width,
    }
    .into()];
    for i in width..(2 * width) {
        items.push(Item::Clause(unit(neg(&bit(result, i)))));
    }
    items
}

fn expand_sum(
    input: &str,
    output: &str,
    overflow: &str,
    count: u32,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_sum();
    let acc = |i: u32| format!("Sum_Acc_{}_{}", z(k), z(i as u64));
    let stage_overflow = format!("Sum_Overflow_{}", z(k));

    let mut items = vec![Constraint::InputEquals {
        input: acc(0),
        value: 0,
        width,
    }
    .into()];
    for i in 0..count {
        items.push(
            Constraint::Add {
                a: bit(input, i),
                b: acc(i),
                result: acc(i + 1),
                overflow: bit(&stage_overflow, i),
                width,
            }
            .into(),
        );
    }
    items.push(
        Constraint::Equals {
            a: output.to_string(),
            b: acc(count),
            width,
        }
        .into(),
    );
    items.push(
        Constraint::OrReduce {
            a: stage_overflow,
            result: overflow.to_string(),
            width: count,
        }
        .into(),
    );
    items
}

fn expand_product(
    input: &str,
    output: &str,
    overflow: &str,
    count: u32,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_product();
    let acc = |i: u32| format!("Product_Acc_{}_{}", z(k), z(i as u64));
    let stage_overflow = format!("Product_Overflow_{}", z(k));

    let mut items = vec![Constraint::InputEquals {
        input: acc(0),
        value: 1,
        width,
    }
    .into()];
    for i in 0..count {
        items.push(
            Constraint::Mul {
                a: bit(input, i),
                b: acc(i),
                result: acc(i + 1),
                overflow: bit(&stage_overflow, i),
                width,
            }
            .into(),
        );
    }
    items.push(
        Constraint::Equals {
            a: output.to_string(),
            b: acc(count),
            width,
        }
        .into(),
    );
    items.push(
        Constraint::OrReduce {
            a: stage_overflow,
            result: overflow.to_string(),
            width: count,
        }
        .into(),
    );
    items
}

fn expand_pow(
    base: &str,
    exp: &str,
    result: &str,
    overflow: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_pow();
    let square = |i: u32| format!("Pow_Square_{}_{}", z(k), z(i as u64));
    let square_overflow = format!("Pow_SquareOverflow_{}", z(k));
    let factor = |i: u32| format!("Pow_Factor_{}_{}", z(k), z(i as u64));
    let acc = |i: u32| format!("Pow_Acc_{}_{}", z(k), z(i as u64));
    let acc_overflow = format!("Pow_AccOverflow_{}", z(k));
    let run = format!("Pow_OverflowRun_{}", z(k));
    let guard = format!("Pow_OverflowGuard_{}", z(k));
    let acc_any = format!("Pow_AccOverflowAny_{}", z(k));
    let guard_any = format!("Pow_OverflowGuardAny_{}", z(k));

    let mut items = Vec::new();
    // square(i) holds base^(2^i)
    items.push(
        Constraint::Equals {
            a: square(0),
            b: base.to_string(),
            width,
        }
        .into(),
    );
    for i in 0..width {
        items.push(
            Constraint::Mul {
                a: square(i),
                b: square(i),
                result: square(i + 1),
                overflow: bit(&square_overflow, i),
                width,
            }
            .into(),
        );
    }
    // factor(i) contributes square(i) exactly when exponent bit i is set
    for i in 0..width {
        items.push(
            Constraint::Mux {
                a: square(i),
                b: one_nbit(width),
                cond: bit(exp, i),
                result: factor(i),
                width,
            }
            .into(),
        );
    }
    items.push(
        Constraint::InputEquals {
            input: acc(0),
            value: 1,
            width,
        }
        .into(),
    );
    for i in 0..width {
        items.push(
            Constraint::Mul {
                a: factor(i),
                b: acc(i),
                result: acc(i + 1),
                overflow: bit(&acc_overflow, i),
                width,
            }
            .into(),
        );
    }
    items.push(
        Constraint::Equals {
            a: result.to_string(),
            b: acc(width),
            width,
        }
        .into(),
    );
    // run(i) = OR of the squaring overflows below step i
    items.push(Item::Clause(unit(neg(&bit(&run, 0)))));
    for i in 0..width {
        items.extend(
            gates::or_bit(&bit(&run, i), &bit(&square_overflow, i), &bit(&run, i + 1))
                .into_iter()
                .map(Item::Clause),
        );
    }
    // A squaring overflow matters only if a higher exponent bit selects
    // that or a later square. The exponent bit at index `width` is the
    // implicit zero extension, so the last guard is pinned false.
    for i in 0..width {
        if i + 1 < width {
            items.extend(
                gates::mux_bit(&bit(&run, i + 1), &zero_1bit(), &bit(exp, i + 1), &bit(&guard, i))
                    .into_iter()
                    .map(Item::Clause),
            );
        } else {
            items.push(Item::Clause(unit(neg(&bit(&guard, i)))));
        }
    }
    items.push(
        Constraint::OrReduce {
            a: acc_overflow,
            result: acc_any.clone(),
            width,
        }
        .into(),
    );
    items.push(
        Constraint::OrReduce {
            a: guard,
            result: guard_any.clone(),
            width,
        }
        .into(),
    );
    items.extend(
        gates::or_bit(&acc_any, &guard_any, overflow)
            .into_iter()
            .map(Item::Clause),
    );
    items
}

fn expand_pow_mod(
    base: &str,
    exp: &str,
    modulo: &str,
    result: &str,
    width: u32,
    mint: &mut NameMint,
) -> Vec<Item> {
    let k = mint.next_pow_mod();
    let wide = 2 * width;
    let base2x = format!("PowMod_Base2x_{}", z(k));
    let exp2x = format!("PowMod_Exp2x_{}", z(k));
    let mod2x = format!("PowMod_Mod2x_{}", z(k));
    let partial = |i: u32| format!("PowMod_Partial_{}_{}", z(k), z(i as u64));
    let factor = |i: u32| format!("PowMod_Factor_{}_{}", z(k), z(i as u64));
    let product = |i: u32| format!("PowMod_Product_{}_{}", z(k), z(i as u64));
    let product_overflow = |i: u32| format!("PowMod_ProductOverflow_{}_{}", z(k), z(i as u64));
    let product_quot = |i: u32| format!("PowMod_ProductQuot_{}_{}", z(k), z(i as u64));
    let square = |i: u32| format!("PowMod_Square_{}_{}", z(k), z(i as u64));
    let square_overflow = |i: u32| format!("PowMod_SquareOverflow_{}_{}", z(k), z(i as u64));
    let square_quot = |i: u32| format!("PowMod_SquareQuot_{}_{}", z(k), z(i as u64));
    let cur = |i: u32| format!("PowMod_CurPow_{}_{}", z(k), z(i as u64));

    let mut items = Vec::new();
    items.push(
        Constraint::ZeroExtend {
            a: base.to_string(),
            result: base2x.clone(),
            width,
        }
        .into(),
    );
    items.push(
        Constraint::ZeroExtend {
            a: exp.to_string(),
            result: exp2x.clone(),
            width,
        }
        .into(),
    );
    items.push(
        Constraint::ZeroExtend {
            a: modulo.to_string(),
            result: mod2x.clone(),
            width,
        }
        .into(),
    );
    items.push(
        Constraint::InputEquals {
            input: partial(0),
            value: 1,
            width: wide,
        }
        .into(),
    );
    items.push(
        Constraint::Equals {
            a: cur(0),
            b: base2x,
            width: wide,
        }
        .into(),
    );
    for i in 0..width {
        items.push(
            Constraint::Mux {
                a: cur(i),
                b: one_nbit(wide),
                cond: bit(&exp2x, i),
                result: factor(i),
                width: wide,
            }
            .into(),
        );
        items.push(
            Constraint::Mul {
                a: partial(i),
                b: factor(i),
                result: product(i),
                overflow: product_overflow(i),
                width: wide,
            }
            .into(),
        );
        items.push(Item::Clause(unit(neg(&product_overflow(i)))));
        items.push(
            Constraint::DivMod {
                a: product(i),
                b: mod2x.clone(),
                div: product_quot(i),
                modulo: partial(i + 1),
                width: wide,
            }
            .into(),
        );
        items.push(
            Constraint::Mul {
                a: cur(i),
                b: cur(i),
                result: square(i),
                overflow: square_overflow(i),
                width: wide,
            }
            .into(),
        );
        items.push(Item::Clause(unit(neg(&square_overflow(i)))));
        items.push(
            Constraint::DivMod {
                a: square(i),
                b: mod2x.clone(),
                div: square_quot(i),
                modulo: cur(i + 1),
                width: wide,
            }
            .into(),
        );
    }
    items.push(
        Constraint::Equals {
            a: result.to_string(),
            b: partial(width),
            width,
        }
        .into(),
    );
    items
}
