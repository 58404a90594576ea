#![no_main]

use fibvec::Vector;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must either decode into a structurally valid
    // vector or be rejected; it must never panic.
    if let Ok(vec) = Vector::from_bytes(data) {
        let _ = vec.len();
        let _ = vec.size();
        // Re-encoding an accepted vector must be accepted again.
        let again = Vector::from_bytes(&vec.to_bytes()).expect("re-encode must decode");
        assert_eq!(again.len(), vec.len());
    }
});
