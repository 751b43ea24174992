//! Top-level compilation: fixed-point expansion of the constraint list,
//! literal collection, canonical sort, integer assignment, DIMACS emission.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use super::config::CompileConfig;
use super::constraint::Item;
use super::mint::NameMint;

/// Variable and clause counts of an emitted CNF file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CnfStats {
    pub num_vars: u64,
    pub num_clauses: u64,
}

const LITERAL_PATTERN: &str = r"<[A-Za-z0-9_]+>";

/// Percentage heartbeat on standard error, at most `progress_steps` equally
/// spaced points per pass.
struct Heartbeat {
    total: usize,
    step: usize,
    enabled: bool,
}

impl Heartbeat {
    fn new(total: usize, config: &CompileConfig) -> Self {
        let steps = config.progress_steps.max(1) as usize;
        Self {
            total,
            step: (total / steps).max(1),
            enabled: config.report_progress && total > 0,
        }
    }

    fn tick(&self, i: usize) {
        if self.enabled && i % self.step == 0 {
            eprintln!("{}%...", 100 * i / self.total);
        }
    }
}

/// Compiles a list of clause strings and constraint nodes into a DIMACS CNF
/// file: three comment lines, one `cv <name> <id>` line per variable in ID
/// order, the `p cnf` header, then the clauses.
pub fn generate_cnf(
    conditions: Vec<Item>,
    mint: &mut NameMint,
    config: &CompileConfig,
    path: &Path,
) -> Result<CnfStats> {
    let clauses = expand_fixed_point(conditions, mint, config);
    let literal_re = Regex::new(LITERAL_PATTERN).expect("literal pattern is valid");

    if config.report_progress {
        eprintln!("gather literals...");
    }
    let mut literal_set: HashSet<String> = HashSet::new();
    let beat = Heartbeat::new(clauses.len(), config);
    for (i, cl) in clauses.iter().enumerate() {
        beat.tick(i);
        for m in literal_re.find_iter(cl) {
            if !literal_set.contains(m.as_str()) {
                literal_set.insert(m.as_str().to_owned());
            }
        }
    }

    if config.report_progress {
        eprintln!("sorting literals...");
    }
    // Two classes: lowercase-first tokens (user-named variables) come
    // first and so receive the small IDs; within a class the order is
    // lexicographic. This order is part of the output contract.
    let mut literals: Vec<String> = literal_set.into_iter().collect();
    literals.sort_by(|a, b| {
        let a_upper = a.as_bytes()[1].is_ascii_uppercase();
        let b_upper = b.as_bytes()[1].is_ascii_uppercase();
        match (a_upper, b_upper) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => a.cmp(b),
        }
    });

    if config.report_progress {
        eprintln!("mapping symbol to integer...");
    }
    let mut ids: HashMap<&str, usize> = HashMap::with_capacity(literals.len());
    for (i, token) in literals.iter().enumerate() {
        ids.insert(token.as_str(), i + 1);
    }

    if config.report_progress {
        eprintln!("replacing symbol to integer...");
    }
    let beat = Heartbeat::new(clauses.len(), config);
    let mut replaced = Vec::with_capacity(clauses.len());
    for (i, cl) in clauses.iter().enumerate() {
        beat.tick(i);
        let line = literal_re.replace_all(cl, |caps: &regex::Captures| ids[&caps[0]].to_string());
        replaced.push(line.into_owned());
    }

    if config.report_progress {
        eprintln!("writing cnf to file...");
    }
    let file = File::create(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "c")?;
    writeln!(out, "c")?;
    writeln!(out, "c")?;
    for (i, token) in literals.iter().enumerate() {
        writeln!(out, "cv {} {}", &token[1..token.len() - 1], i + 1)?;
    }
    writeln!(out, "p cnf {} {}", literals.len(), replaced.len())?;
    let beat = Heartbeat::new(replaced.len(), config);
    for (i, line) in replaced.iter().enumerate() {
        beat.tick(i);
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    debug!(
        num_vars = literals.len(),
        num_clauses = replaced.len(),
        "cnf written"
    );
    if config.report_progress {
        eprintln!("CNF file generated successfully: {}", path.display());
    }
    Ok(CnfStats {
        num_vars: literals.len() as u64,
        num_clauses: replaced.len() as u64,
    })
}

/// Repeatedly rewrites the list, replacing every node by its expansion,
/// until only clause strings remain.
fn expand_fixed_point(
    mut items: Vec<Item>,
    mint: &mut NameMint,
    config: &CompileConfig,
) -> Vec<String> {
    let mut iter = 0u32;
    loop {
        iter += 1;
        if config.report_progress {
            eprintln!("expand : {}", iter);
        }
        let mut next = Vec::with_capacity(items.len());
        let mut changed = false;
        for item in items {
            match item {
                Item::Clause(s) => next.push(Item::Clause(s)),
                Item::Node(node) => {
                    changed = true;
                    next.extend(node.expand(mint));
                }
            }
        }
        items = next;
        if !changed {
            break;
        }
    }
    items
        .into_iter()
        .filter_map(|item| match item {
            Item::Clause(s) => Some(s),
            Item::Node(_) => None,
        })
        .collect()
}
