use std::path::Path;

use anyhow::Result;
use tracing::debug;

pub mod certificate;
pub mod clause;
pub mod config;
pub mod constraint;
pub mod emit;
pub mod gates;
pub mod merge;
pub mod mint;
pub mod naming;

pub use config::CompileConfig;
pub use constraint::{Constraint, Item};
pub use emit::CnfStats;
pub use mint::NameMint;

/// Accumulates clause strings and constraint nodes, then expands, numbers
/// and writes them as a DIMACS CNF file.
pub struct CnfCompiler {
    conditions: Vec<Item>,
    mint: NameMint,
    config: CompileConfig,
}

impl CnfCompiler {
    pub fn new() -> Self {
        Self::new_with_config(CompileConfig::default())
    }

    pub fn new_with_config(config: CompileConfig) -> Self {
        Self {
            conditions: Vec::new(),
            mint: NameMint::new(),
            config,
        }
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.conditions.push(Item::Node(constraint));
    }

    pub fn push_clause<S: Into<String>>(&mut self, clause: S) {
        self.conditions.push(Item::Clause(clause.into()));
    }

    /// Pins the shared constant-one variable at the given width to decimal 1.
    pub fn pin_one(&mut self, width: u32) {
        self.push(Constraint::InputEquals {
            input: naming::one_nbit(width),
            value: 1,
            width,
        });
    }

    /// Pins the shared single-bit constant-zero variable false.
    pub fn pin_zero(&mut self) {
        self.push_clause(clause::unit(clause::neg(&naming::zero_1bit())));
    }

    /// Expands every pending condition, numbers the literals and writes the
    /// DIMACS file. The pending list is consumed.
    pub fn write_dimacs(&mut self, path: &Path) -> Result<CnfStats> {
        let conditions = std::mem::take(&mut self.conditions);
        debug!(
            num_conditions = conditions.len(),
            path = %path.display(),
            "compiling"
        );
        emit::generate_cnf(conditions, &mut self.mint, &self.config, path)
    }
}

impl Default for CnfCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of bits needed to represent `value`; 0 for 0.
pub fn bit_width(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}
