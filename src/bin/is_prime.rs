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
        println!("usage: is_prime number.");
        process::exit(1);
    }
    let decimal = Regex::new(r"^\d+$")?;
    if !decimal.is_match(&args[1]) {
        println!("usage: is_prime number.");
        process::exit(1);
    }
    let target: u64 = args[1].parse().context("number out of range")?;
    let width = bit_width(target).max(2);

    println!("Target: {} (bit width: {})", target, width);

    let mut compiler = CnfCompiler::new();
    compiler.push(Constraint::IsPrime {
        target: "target".into(),
        width,
        num_primes: width,
    });
    compiler.push(Constraint::InputEquals {
        input: "target".into(),
        value: target,
        width,
    });
    compiler.pin_one(width);
    compiler.pin_one(width * 2);
    compiler.pin_zero();

    let filename = format!("is_prime_{}.cnf", target);
    compiler.write_dimacs(Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("Testing if {} is prime.", target);
    println!("This CNF will be satisfiable if {} is prime.", target);
    println!("If the CNF is unsatisfiable, {} is composite.", target);
    Ok(())
}
