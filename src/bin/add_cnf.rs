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
    if args.len() != 3 {
        println!("usage: add_cnf number1 number2.");
        process::exit(1);
    }
    let decimal = Regex::new(r"^\d+$")?;
    if !decimal.is_match(&args[1]) || !decimal.is_match(&args[2]) {
        println!("usage: add_cnf number1 number2.");
        process::exit(1);
    }
    let num1: u64 = args[1].parse().context("number1 out of range")?;
    let num2: u64 = args[2].parse().context("number2 out of range")?;
    let sum = num1 + num2;

    let input_width = bit_width(num1.max(num2));
    let width = (input_width + 1).max(bit_width(sum));

    println!("Input 1: {} (bit width: {})", num1, input_width);
    println!("Input 2: {} (bit width: {})", num2, input_width);
    println!("Expected sum: {} (bit width: {})", sum, bit_width(sum));
    println!("Using bit width: {}", width);

    let mut compiler = CnfCompiler::new();
    compiler.push(Constraint::Add {
        a: "input1".into(),
        b: "input2".into(),
        result: "result".into(),
        overflow: "overflow".into(),
        width,
    });
    compiler.push(Constraint::InputEquals {
        input: "input1".into(),
        value: num1,
        width,
    });
    compiler.push(Constraint::InputEquals {
        input: "input2".into(),
        value: num2,
        width,
    });
    compiler.push_clause("-<overflow> 0 ");
    compiler.pin_one(width);
    compiler.pin_zero();

    let filename = format!("add_{}_{}.cnf", num1, num2);
    compiler.write_dimacs(Path::new(&filename))?;

    println!("CNF file generated: {}", filename);
    println!("Expected result: {}", sum);
    Ok(())
}
