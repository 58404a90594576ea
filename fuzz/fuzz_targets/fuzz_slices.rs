#![no_main]

use fibvec::Vector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (head, rest) = data.split_at(4);

    // Small magnitudes stress pad placement and codeword packing the
    // hardest, so feed bytes in directly.
    let mut vec = Vector::new();
    let mut values = Vec::new();
    for &b in rest {
        let v = i64::from(b as i8);
        vec.add(v).unwrap();
        values.push(v);
    }
    if values.is_empty() {
        return;
    }

    let a = usize::from(u16::from_le_bytes([head[0], head[1]])) % values.len();
    let b = usize::from(u16::from_le_bytes([head[2], head[3]])) % values.len();
    let (start, end) = (a.min(b), a.max(b) + 1);

    assert_eq!(vec.get_values(start, end), &values[start..end]);
    for i in start..end {
        assert_eq!(vec.get(i), values[i], "index {i}");
    }
});
