#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibdev_core::bignum::DecimalBuf;

fuzz_target!(|data: &[u8]| {
    // Split the input into two operands at the first non-digit byte.
    let split = data.iter().position(|b| !b.is_ascii_digit()).unwrap_or(data.len());
    let (x, rest) = data.split_at(split);
    let y = rest.get(1..).unwrap_or(&[]);

    let (Ok(a), Ok(b)) = (DecimalBuf::from_lsb_digits(x), DecimalBuf::from_lsb_digits(y)) else {
        return;
    };

    let ab = a.checked_add(&b);
    let ba = b.checked_add(&a);
    assert_eq!(ab, ba, "addition is not commutative");

    if let Ok(sum) = ab {
        let to_big = |buf: &DecimalBuf| BigUint::parse_bytes(buf.clone().into_text().digits(), 10);
        let expected = to_big(&a).zip(to_big(&b)).map(|(a, b)| a + b);
        assert_eq!(to_big(&sum), expected);
    }
});
