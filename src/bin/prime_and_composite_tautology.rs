use std::env;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use primecnf::compiler::{CnfCompiler, Constraint};

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("usage: prime_and_composite_tautology bit_width.");
        process::exit(1);
    }
    let decimal = Regex::new(r"^\d+$")?;
    if !decimal.is_match(&args[1]) {
        println!("usage: prime_and_composite_tautology bit_width.");
        process::exit(1);
    }
    let width: u32 = args[1].parse().context("bit width out of range")?;

    // A number that is simultaneously prime and composite: the conjunction
    // is unsatisfiable, and the emitted CNF witnesses it.
    let mut compiler = CnfCompiler::new();
    compiler.push(Constraint::IsPrime {
        target: "target".into(),
        width,
        num_primes: width,
    });
    compiler.push(Constraint::IsComposite {
        target: "target".into(),
        width,
    });
    compiler.pin_one(width);
    compiler.pin_one(width * 2);
    compiler.pin_zero();

    let filename = format!("prime_and_composite_tautology_{}.cnf", width);
    compiler.write_dimacs(Path::new(&filename))?;
    Ok(())
}
