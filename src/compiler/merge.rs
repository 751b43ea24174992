//! Joins a SAT solver's variable assignment back to the symbolic names
//! recorded in the `cv` comment block of an emitted CNF file.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};

/// One variable of a solved CNF: symbolic name, DIMACS ID, solved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedVar {
    pub name: String,
    pub id: u64,
    pub value: bool,
}

/// Reads the `cv <name> <id>` comment block, in file order.
pub fn read_name_map(cnf_text: &str) -> Result<Vec<(String, u64)>> {
    let mut map = Vec::new();
    for line in cnf_text.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() != Some("cv") {
            continue;
        }
        let name = parts.next().context("cv line missing variable name")?;
        let id: u64 = parts
            .next()
            .context("cv line missing variable id")?
            .parse()
            .context("cv id is not an integer")?;
        map.push((name.to_string(), id));
    }
    Ok(map)
}

/// Reads a solver's `v` lines into an ID -> value assignment. All other
/// lines (`s ...`, comments) are ignored.
pub fn read_assignment(solver_text: &str) -> Result<HashMap<u64, bool>> {
    let mut assignment = HashMap::new();
    for line in solver_text.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() != Some("v") {
            continue;
        }
        for token in parts {
            let lit: i64 = token
                .parse()
                .with_context(|| format!("bad literal in solver output: {}", token))?;
            if lit == 0 {
                continue;
            }
            assignment.insert(lit.unsigned_abs(), lit > 0);
        }
    }
    Ok(assignment)
}

/// Inverts the ID -> name map and attaches the solved bit to every
/// variable, in `cv` order. Variables the solver left unmentioned default
/// to false.
pub fn merge(cnf_text: &str, solver_text: &str) -> Result<Vec<MergedVar>> {
    let names = read_name_map(cnf_text)?;
    if names.is_empty() {
        bail!("no cv lines found in CNF file");
    }
    let assignment = read_assignment(solver_text)?;
    Ok(names
        .into_iter()
        .map(|(name, id)| MergedVar {
            value: assignment.get(&id).copied().unwrap_or(false),
            name,
            id,
        })
        .collect())
}
