//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks the device read
//! path, the sequence table, and (inside its exact range) fast doubling.

use num_bigint::BigUint;
use serde::Deserialize;

use fibdev_core::fastdoubling::fibonacci_fast;
use fibdev_core::sequence::fibonacci_decimal;
use fibdev_core::{DIGIT_CAPACITY, MAX_FAST_INDEX};
use fibdev_device::{FibDevice, Whence};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    #[serde(default)]
    fib: Option<String>,
    #[serde(default)]
    fib_prefix: Option<String>,
    #[serde(default)]
    fib_digits: Option<usize>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn check_entry(entry: &GoldenEntry, actual: &str, route: &str) {
    if let Some(ref fib) = entry.fib {
        assert_eq!(actual, fib, "{route}: F({}) mismatch", entry.n);
    }
    if let Some(ref prefix) = entry.fib_prefix {
        assert!(
            actual.starts_with(prefix.as_str()),
            "{route}: F({}) does not start with {prefix}",
            entry.n
        );
    }
    if let Some(digits) = entry.fib_digits {
        assert_eq!(actual.len(), digits, "{route}: F({}) digit count", entry.n);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_sequence_table() {
    for entry in &load_golden_data().values {
        let text = fibonacci_decimal(entry.n).unwrap();
        check_entry(entry, &text.to_string(), "table");
    }
}

#[test]
#[allow(clippy::cast_possible_wrap)]
fn golden_device_read() {
    let device = FibDevice::new();
    let mut session = device.open().unwrap();
    let mut buf = [0u8; DIGIT_CAPACITY];

    for entry in &load_golden_data().values {
        assert_eq!(session.seek(entry.n as i64, Whence::Start), entry.n);
        let n = session.read(&mut buf).unwrap();
        assert_eq!(buf[n], 0, "terminator after F({})", entry.n);
        let actual = std::str::from_utf8(&buf[..n]).unwrap();
        check_entry(entry, actual, "device");
    }
}

#[test]
fn golden_fast_doubling() {
    for entry in load_golden_data().values.iter().filter(|e| e.n <= MAX_FAST_INDEX) {
        check_entry(entry, &fibonacci_fast(entry.n).to_string(), "fast");
    }
}

#[test]
fn golden_values_parse_as_integers() {
    for entry in &load_golden_data().values {
        if let Some(ref fib) = entry.fib {
            let parsed: BigUint = fib.parse().unwrap();
            assert_eq!(parsed.to_string(), *fib);
        }
    }
}
