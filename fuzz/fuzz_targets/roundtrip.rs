#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use varpack_test::check_roundtrip;

#[derive(Arbitrary, Debug)]
enum Input {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

fuzz_target!(|input: Input| {
    let result = match input {
        Input::I8(v) => check_roundtrip(v),
        Input::U8(v) => check_roundtrip(v),
        Input::I16(v) => check_roundtrip(v),
        Input::U16(v) => check_roundtrip(v),
        Input::I32(v) => check_roundtrip(v),
        Input::U32(v) => check_roundtrip(v),
        Input::I64(v) => check_roundtrip(v),
        Input::U64(v) => check_roundtrip(v),
    };
    if let Err(e) = result {
        panic!("{}", e);
    }
});
