//! Size class definitions
//!
//! A size class describes the integer range an encoded value of a given
//! byte count can carry. Each byte gives up one bit to the length marker,
//! so a class of `n` bytes carries `7 * n` payload bits:
//! - Class 1: 7 bits
//! - Class 2: 14 bits
//! - ...
//! - Class 8: 56 bits
//!
//! Classes are strictly nested; every class knows the range of the one
//! below it.

/// Number of size classes per signedness
pub const CLASS_COUNT: usize = 8;

/// Payload bits carried per encoded byte
pub const BITS_PER_BYTE: u8 = 7;

/// Whether a class (or integer type) interprets its bits as two's complement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }

    /// All size classes for this signedness, smallest first
    #[inline]
    pub fn classes(self) -> &'static [SizeClass; CLASS_COUNT] {
        match self {
            Signedness::Signed => &SIGNED_CLASSES,
            Signedness::Unsigned => &UNSIGNED_CLASSES,
        }
    }

    /// Size class at a 0-based index
    #[inline]
    pub fn class(self, index: usize) -> Option<&'static SizeClass> {
        self.classes().get(index)
    }
}

/// Integer range representable by a fixed number of encoded bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeClass {
    byte_count: u8,
    signedness: Signedness,
    min_value: i64,
    max_value: i64,
}

impl SizeClass {
    /// Build the class for `byte_count` bytes (1..=8)
    pub const fn new(byte_count: u8, signedness: Signedness) -> Self {
        assert!(byte_count >= 1 && byte_count as usize <= CLASS_COUNT);

        let bits = (byte_count * BITS_PER_BYTE) as u32;
        let (min_value, max_value) = match signedness {
            Signedness::Signed => (-(1i64 << (bits - 1)), (1i64 << (bits - 1)) - 1),
            Signedness::Unsigned => (0, (1i64 << bits) - 1),
        };

        SizeClass {
            byte_count,
            signedness,
            min_value,
            max_value,
        }
    }

    #[inline]
    pub const fn byte_count(&self) -> u8 {
        self.byte_count
    }

    /// 0-based position in the class table
    #[inline]
    pub const fn index(&self) -> usize {
        self.byte_count as usize - 1
    }

    #[inline]
    pub const fn payload_bits(&self) -> u8 {
        self.byte_count * BITS_PER_BYTE
    }

    #[inline]
    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    #[inline]
    pub const fn min_value(&self) -> i64 {
        self.min_value
    }

    #[inline]
    pub const fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Next-smaller class, `None` for class 1
    pub fn previous(&self) -> Option<&'static SizeClass> {
        match self.index() {
            0 => None,
            i => self.signedness.class(i - 1),
        }
    }

    /// Minimum of the next-smaller class (0 for class 1)
    pub fn prev_min_value(&self) -> i64 {
        self.previous().map_or(0, SizeClass::min_value)
    }

    /// Maximum of the next-smaller class (0 for class 1)
    pub fn prev_max_value(&self) -> i64 {
        self.previous().map_or(0, SizeClass::max_value)
    }

    /// Does `value` fit in this class?
    #[inline]
    pub fn contains(&self, value: i128) -> bool {
        value >= self.min_value as i128 && value <= self.max_value as i128
    }

    /// Does `value` fit in the previous class's range?
    ///
    /// Class 1 has no previous class; its range degenerates to `0..=0`.
    #[inline]
    pub fn previous_contains(&self, value: i128) -> bool {
        value >= self.prev_min_value() as i128 && value <= self.prev_max_value() as i128
    }
}

const fn build_classes(signedness: Signedness) -> [SizeClass; CLASS_COUNT] {
    let mut classes = [SizeClass::new(1, signedness); CLASS_COUNT];
    let mut i = 1;
    while i < CLASS_COUNT {
        classes[i] = SizeClass::new(i as u8 + 1, signedness);
        i += 1;
    }
    classes
}

/// Signed size classes, index 0 = 1 byte
pub static SIGNED_CLASSES: [SizeClass; CLASS_COUNT] = build_classes(Signedness::Signed);

/// Unsigned size classes, index 0 = 1 byte
pub static UNSIGNED_CLASSES: [SizeClass; CLASS_COUNT] = build_classes(Signedness::Unsigned);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_signed_ranges() {
        let expected: [(i64, i64); CLASS_COUNT] = [
            (-64, 63),
            (-8192, 8191),
            (-1048576, 1048575),
            (-134217728, 134217727),
            (-17179869184, 17179869183),
            (-2199023255552, 2199023255551),
            (-281474976710656, 281474976710655),
            (-36028797018963968, 36028797018963967),
        ];

        for (class, (min, max)) in SIGNED_CLASSES.iter().zip(expected) {
            assert_eq!(class.min_value(), min, "class {}", class.byte_count());
            assert_eq!(class.max_value(), max, "class {}", class.byte_count());
        }
    }

    #[test]
    fn test_unsigned_ranges() {
        let expected: [i64; CLASS_COUNT] = [
            127,
            16383,
            2097151,
            268435455,
            34359738367,
            4398046511103,
            562949953421311,
            72057594037927935,
        ];

        for (class, max) in UNSIGNED_CLASSES.iter().zip(expected) {
            assert_eq!(class.min_value(), 0);
            assert_eq!(class.max_value(), max, "class {}", class.byte_count());
        }
    }

    #[test]
    fn test_payload_bits() {
        for (i, class) in SIGNED_CLASSES.iter().enumerate() {
            assert_eq!(class.byte_count() as usize, i + 1);
            assert_eq!(class.index(), i);
            assert_eq!(class.payload_bits() as usize, 7 * (i + 1));
        }
    }

    #[test]
    fn test_first_class_has_no_previous() {
        for signedness in [Signedness::Signed, Signedness::Unsigned] {
            let first = &signedness.classes()[0];
            assert!(first.previous().is_none());
            assert_eq!(first.prev_min_value(), 0);
            assert_eq!(first.prev_max_value(), 0);
        }
    }

    #[test]
    fn test_previous_chain() {
        let int4 = &SIGNED_CLASSES[3];
        assert_eq!(int4.prev_min_value(), -1048576);
        assert_eq!(int4.prev_max_value(), 1048575);
        assert_eq!(int4.previous(), Some(&SIGNED_CLASSES[2]));

        let uint8 = &UNSIGNED_CLASSES[7];
        assert_eq!(uint8.prev_min_value(), 0);
        assert_eq!(uint8.prev_max_value(), 562949953421311);
    }

    #[test]
    fn test_class_lookup() {
        assert_eq!(Signedness::Unsigned.class(0), Some(&UNSIGNED_CLASSES[0]));
        assert!(Signedness::Signed.class(CLASS_COUNT).is_none());
        assert!(Signedness::Signed.is_signed());
        assert!(!Signedness::Unsigned.is_signed());
    }

    #[test]
    fn test_contains_bounds() {
        let int1 = &SIGNED_CLASSES[0];
        assert!(int1.contains(-64));
        assert!(int1.contains(63));
        assert!(!int1.contains(-65));
        assert!(!int1.contains(64));

        let uint1 = &UNSIGNED_CLASSES[0];
        assert!(!uint1.contains(-1));
        assert!(uint1.contains(127));
        assert!(!uint1.contains(u64::MAX as i128));
    }

    proptest! {
        /// Ranges are nested: once a class holds a value, every larger class does too
        #[test]
        fn prop_classes_nested(raw in any::<i64>(), shift in 0u32..64) {
            let value = raw >> shift;
            for signedness in [Signedness::Signed, Signedness::Unsigned] {
                let classes = signedness.classes();
                let first = classes.iter().position(|c| c.contains(value as i128));
                if let Some(first) = first {
                    prop_assert!(classes[first..].iter().all(|c| c.contains(value as i128)));
                    if first > 0 {
                        prop_assert!(!classes[first].previous_contains(value as i128));
                    }
                }
            }
        }
    }
}
