use primecnf::compiler::naming::{bit, one_nbit, z, zero_1bit};

#[test]
fn test_z_zero_pads_to_ten_digits() {
    assert_eq!(z(0), "0000000000");
    assert_eq!(z(1), "0000000001");
    assert_eq!(z(1234567890), "1234567890");
}

#[test]
fn test_z_extends_beyond_ten_digits() {
    assert_eq!(z(12345678901), "12345678901");
}

#[test]
fn test_bit_composes_prefix_and_index() {
    assert_eq!(bit("target", 0), "target_0000000000");
    assert_eq!(bit("Mul_Acc_0000000001_0000000002", 3), "Mul_Acc_0000000001_0000000002_0000000003");
}

#[test]
fn test_pinned_constant_names() {
    assert_eq!(one_nbit(4), "One_NBit_0000000004");
    assert_eq!(zero_1bit(), "Zero_1Bit_0000000001");
}
