#![no_main]

use fibvec::Vector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut vec = Vector::new();
    let mut values = Vec::new();

    // Bytes are interpreted as i64 values; out-of-range ones must be
    // rejected without touching the vector.
    for chunk in data.chunks_exact(8) {
        let v = i64::from_le_bytes(chunk.try_into().unwrap());
        match vec.add(v) {
            Ok(()) => values.push(v),
            Err(_) => assert!(!(fibvec::MIN_VALUE..=fibvec::MAX_VALUE).contains(&v)),
        }
    }

    // Property 1: every value reads back unchanged.
    assert_eq!(vec.len(), values.len());
    for (i, &v) in values.iter().enumerate() {
        assert_eq!(vec.get(i), v, "index {i}");
    }

    // Property 2: bulk reads agree with single reads.
    if !values.is_empty() {
        assert_eq!(vec.get_values(0, values.len()), values);
    }

    // Property 3: serialization round-trips.
    let back = Vector::from_bytes(&vec.to_bytes()).expect("own output must decode");
    assert_eq!(back, vec);
});
