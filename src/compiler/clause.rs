/// Positive literal fragment for a variable name. The angle brackets are
/// what the numbering pass scans for.
pub fn pos(name: &str) -> String {
    format!("<{}>", name)
}

/// Negative literal fragment.
pub fn neg(name: &str) -> String {
    format!("-<{}>", name)
}

/// Assembles a clause from literal fragments, terminated DIMACS-style with
/// a trailing `0 `.
pub fn clause(lits: &[String]) -> String {
    let mut s = lits.join(" ");
    s.push_str(" 0 ");
    s
}

/// Single-literal clause.
pub fn unit(lit: String) -> String {
    clause(std::slice::from_ref(&lit))
}
