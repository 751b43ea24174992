/// Formats a non-negative integer as a zero-padded decimal string of at
/// least 10 digits. Every minted variable-name suffix goes through this, so
/// instances of the same constructor stay textually distinct and sort in
/// numeric order.
pub fn z(i: u64) -> String {
    format!("{:010}", i)
}

/// Bit `i` of the multi-bit variable with the given name prefix (LSB-first).
/// No object materializes the aggregate; it exists only through this
/// composition.
pub fn bit(prefix: &str, i: u32) -> String {
    format!("{}_{}", prefix, z(i as u64))
}

/// Name of the shared constant-one variable at the given width. Constructors
/// reference this name; the top-level program is responsible for pinning its
/// value to decimal 1.
pub fn one_nbit(width: u32) -> String {
    format!("One_NBit_{}", z(width as u64))
}

/// Name of the shared single-bit constant-zero variable, pinned false by the
/// top-level program.
pub fn zero_1bit() -> String {
    format!("Zero_1Bit_{}", z(1))
}
