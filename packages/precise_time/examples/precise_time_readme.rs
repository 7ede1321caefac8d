//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `precise_time` package `README.md`.

fn main() {
    use precise_time::Clock;

    // Create a clock backed by the best time source of this build.
    let mut clock = Clock::new();

    let start = clock.read();

    // Simulate some work.
    std::thread::sleep(std::time::Duration::from_millis(10));

    let end = clock.read();

    // Seconds in wall-clock builds; see the crate documentation for the
    // other build configurations.
    let elapsed = clock.elapsed(start, end);
    println!("Work completed in {elapsed} seconds");
}
