use std::env;
use std::fs;
use std::process;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use primecnf::compiler::merge;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        println!("usage: merge_result cnf_file solver_output_file.");
        process::exit(1);
    }
    let cnf = fs::read_to_string(&args[1]).context("failed to read CNF file")?;
    let solver = fs::read_to_string(&args[2]).context("failed to read solver output file")?;

    for var in merge::merge(&cnf, &solver)? {
        println!("cv {} {} {}", var.name, var.id, u8::from(var.value));
    }
    Ok(())
}
