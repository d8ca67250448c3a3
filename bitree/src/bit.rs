/// Value of the lowest set bit of `value`, zero when `value` is zero.
///
/// ```text
/// 0b0110_1000 -> 0b0000_1000
/// ```
#[inline]
#[must_use]
pub fn lowest_set_bit(value: usize) -> usize {
    value & value.wrapping_neg()
}

#[test]
fn lowest_set_bit_test() {
    assert_eq!(lowest_set_bit(0), 0);
    assert_eq!(lowest_set_bit(1), 1);
    assert_eq!(lowest_set_bit(6), 2);
    assert_eq!(lowest_set_bit(8), 8);
    assert_eq!(lowest_set_bit(0b0110_1000), 0b1000);
    assert_eq!(lowest_set_bit(usize::MAX), 1);
    assert_eq!(lowest_set_bit(1 << (usize::BITS - 1)), 1 << (usize::BITS - 1));
}
