use bytes::Bytes;
use proptest::prelude::*;

use varpack_core::{DecodeError, PackInt};
use varpack_wire::{
    decode, decode_from_buffer, encode, payload_size_for, size_for, PackBuf, Packed,
    LEAD_MARKERS,
};

use crate::check_roundtrip;

macro_rules! proptest_width {
    ($t:ty, $mod_name:ident) => {
        mod $mod_name {
            use super::*;

            proptest! {
                /// Property: every path agrees and recovers the value
                #[test]
                fn prop_roundtrip(value in any::<$t>()) {
                    let result = check_roundtrip(value);
                    prop_assert!(result.is_ok(), "{:?}", result);
                }

                /// Property: magnitude-biased values agree too
                #[test]
                fn prop_roundtrip_shifted(raw in any::<i64>(), shift in 0u32..64) {
                    let value = <$t>::from_bits((raw >> shift) as u64);
                    let result = check_roundtrip(value);
                    prop_assert!(result.is_ok(), "{:?}", result);
                }

                /// Property: any strict prefix of an encoding is rejected as truncated
                #[test]
                fn prop_truncation_detected(value in any::<$t>(), cut in any::<prop::sample::Index>()) {
                    let packed = Packed::new(value).unwrap();
                    let cut = cut.index(packed.len());

                    let prefix = &packed.as_bytes()[..cut];
                    let result = decode_from_buffer::<$t>(prefix);
                    if cut == 0 {
                        prop_assert!(matches!(result, Err(DecodeError::NoFirstByte)));
                    } else {
                        prop_assert!(
                            matches!(result, Err(DecodeError::NotEnoughData { .. })),
                            "expected NotEnoughData, got {:?}",
                            result
                        );
                    }
                }
            }
        }
    };
}

proptest_width!(i8, i8_width);
proptest_width!(u8, u8_width);
proptest_width!(i16, i16_width);
proptest_width!(u16, u16_width);
proptest_width!(i32, i32_width);
proptest_width!(u32, u32_width);
proptest_width!(i64, i64_width);
proptest_width!(u64, u64_width);

proptest! {
    /// Property: the leading byte announces exactly the encoded length
    #[test]
    fn prop_leading_byte_self_describing(value in any::<i64>()) {
        let mut wire = Vec::new();
        let written = encode(value, &mut wire).unwrap();
        prop_assert_eq!(payload_size_for(wire[0]) as usize + 1, written);
        prop_assert_eq!(wire[0] & LEAD_MARKERS[size_for(value) as usize], LEAD_MARKERS[size_for(value) as usize]);
    }

    /// Property: arbitrary input never panics and the decoders agree
    #[test]
    fn prop_arbitrary_bytes_paths_agree(input in prop::collection::vec(any::<u8>(), 0..12)) {
        let from_buffer = decode_from_buffer::<i64>(&input);

        let mut source = &input[..];
        let from_stream = decode::<i64, _>(&mut source);

        let mut chunked = Bytes::copy_from_slice(&input);
        let from_bytes = chunked.get_packed::<i64>();

        match (from_buffer, from_stream, from_bytes) {
            (Ok(a), Ok(b), Ok(c)) => {
                prop_assert_eq!(a, b);
                prop_assert_eq!(a, c);
                prop_assert_eq!(input.len() - source.len(), a.size);
            }
            (Err(a), Err(b), Err(c)) => {
                prop_assert_eq!(std::mem::discriminant(&a), std::mem::discriminant(&b));
                prop_assert_eq!(std::mem::discriminant(&a), std::mem::discriminant(&c));
            }
            (a, b, c) => prop_assert!(false, "paths disagree: {:?} / {:?} / {:?}", a, b, c),
        }
    }

    /// Property: a value decoded from arbitrary bytes re-encodes no longer than it was read
    #[test]
    fn prop_reencode_not_longer(input in prop::collection::vec(any::<u8>(), 1..10)) {
        if let Ok(decoded) = decode_from_buffer::<u64>(&input) {
            let packed = Packed::new(decoded.value).unwrap();
            prop_assert!(packed.len() <= decoded.size);
            prop_assert_eq!(decode_from_buffer::<u64>(packed.as_bytes()).unwrap().value, decoded.value);
        }
    }
}
