use std::env;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use primecnf::compiler::{bit_width, CnfCompiler, Constraint};

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("usage: prime_factoring_cnf number.");
        process::exit(1);
    }
    let decimal = Regex::new(r"^\d+$")?;
    if !decimal.is_match(&args[1]) {
        println!("usage: prime_factoring_cnf number.");
        process::exit(1);
    }
    let target: u64 = args[1].parse().context("number out of range")?;
    let width = bit_width(target);

    println!("Target: {} (bit width: {})", target, width);

    let mut compiler = CnfCompiler::new();
    compiler.push(Constraint::Mul {
        a: "factor1".into(),
        b: "factor2".into(),
        result: "target".into(),
        overflow: "overflow".into(),
        width,
    });
    // Forbidding the target itself as a factor rules out the trivial
    // 1 * N factorisation, so a prime target leaves the CNF unsatisfiable.
    compiler.push(Constraint::InputNotEquals {
        input: "factor1".into(),
        value: target,
        width,
    });
    compiler.push(Constraint::InputNotEquals {
        input: "factor2".into(),
        value: target,
        width,
    });
    compiler.push(Constraint::InputEquals {
        input: "target".into(),
        value: target,
        width,
    });
    compiler.push_clause("-<overflow> 0 ");
    compiler.pin_one(width);
    compiler.pin_one(width * 2);
    compiler.pin_zero();

    let filename = format!("prime_factoring_{}.cnf", target);
    compiler.write_dimacs(Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("Looking for factors of: {}", target);
    println!(
        "This CNF will be satisfiable if {} has non-trivial factors.",
        target
    );
    Ok(())
}
