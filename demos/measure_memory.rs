use fibvec::Vector;
use std::mem;

/// Deterministic xorshift so runs are comparable.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn measure(label: &str, n: usize, mut gen: impl FnMut(usize) -> i64) {
    let mut vec = Vector::new();
    for i in 0..n {
        vec.add(gen(i)).expect("value in range");
    }

    let raw = n * mem::size_of::<i64>();
    let packed = vec.size();
    println!("=== {label} ===");
    println!("values:      {n}");
    println!("raw i64:     {raw} bytes");
    println!("fibvec:      {packed} bytes ({:.2} bytes/value)", packed as f64 / n as f64);
    println!("saved:       {:.1}%\n", (raw - packed) as f64 / raw as f64 * 100.0);
}

fn main() {
    println!("Stack size of Vector: {} bytes\n", mem::size_of::<Vector>());

    let n = 1_000_000;

    let mut rng = Rng(0x1234_5678_9ABC_DEF0);
    measure("uniform u32 range", n, |_| (rng.next() % (1 << 32)) as i64);

    let mut rng = Rng(42);
    measure("small deltas (postings-style)", n, |_| (rng.next() % 128) as i64);

    let mut rng = Rng(7);
    measure("signed around zero", n, |_| (rng.next() % 65) as i64 - 32);
}
