#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::MAX_INDEX;
use fibdev_device::{FibDevice, Whence};

fuzz_target!(|data: &[u8]| {
    let device = FibDevice::new();
    let mut session = device.open().expect("fresh device is free");
    let mut buf = [0u8; 128];

    // 9 bytes per op: origin selector then an i64 offset.
    for chunk in data.chunks_exact(9) {
        let whence = match chunk[0] % 3 {
            0 => Whence::Start,
            1 => Whence::Current,
            _ => Whence::End,
        };
        let offset = i64::from_le_bytes(chunk[1..9].try_into().unwrap());
        let pos = session.seek(offset, whence);
        assert!(pos <= MAX_INDEX);

        let n = session.read(&mut buf).expect("clamped index reads");
        assert_eq!(buf[n], 0);
        assert!(n == 1 || buf[0] != b'0');
    }
});
