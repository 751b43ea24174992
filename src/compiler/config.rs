/// Configuration options for CNF generation.
#[derive(Clone, Debug)]
pub struct CompileConfig {
    /// Emit stage banners and percentage heartbeats on standard error.
    /// Large certificates produce millions of clauses; the heartbeat is the
    /// only sign of life during the collection and substitution passes.
    pub report_progress: bool,

    /// Maximum number of equally spaced heartbeat points per pass.
    pub progress_steps: u32,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            report_progress: true,
            progress_steps: 20,
        }
    }
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for quiet runs (tests, library embedding).
    pub fn quiet() -> Self {
        Self {
            report_progress: false,
            ..Self::default()
        }
    }
}
