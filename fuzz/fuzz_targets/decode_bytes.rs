#![no_main]

use libfuzzer_sys::fuzz_target;
use varpack_core::PackInt;
use varpack_wire::{decode, decode_from_buffer, Packed};

fn check<T: PackInt>(data: &[u8]) {
    let from_buffer = decode_from_buffer::<T>(data);

    let mut source = data;
    let from_stream = decode::<T, _>(&mut source);

    match (from_buffer, from_stream) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_eq!(data.len() - source.len(), a.size);
            assert!(Packed::new(a.value).unwrap().len() <= a.size);
        }
        (Err(a), Err(b)) => {
            assert_eq!(std::mem::discriminant(&a), std::mem::discriminant(&b));
        }
        (a, b) => panic!("decoders disagree: {:?} / {:?}", a, b),
    }
}

fuzz_target!(|data: &[u8]| {
    check::<i8>(data);
    check::<u8>(data);
    check::<i16>(data);
    check::<u16>(data);
    check::<i32>(data);
    check::<u32>(data);
    check::<i64>(data);
    check::<u64>(data);
});
