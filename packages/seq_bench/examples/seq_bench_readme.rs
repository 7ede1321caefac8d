//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `seq_bench` package `README.md`.

use std::hint::black_box;

use new_zealand::nz;
use seq_bench::benchmark;

fn main() {
    // Best-case cost of one invocation, taken over 5 sampling runs
    // of 10 000 invocations each.
    let cost = benchmark(nz!(5), nz!(10_000), || {
        black_box((0..64_u64).sum::<u64>());
    });

    println!("cost per invocation: {cost} seconds");
}
