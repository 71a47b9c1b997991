//! Response-time histogram: capture latencies in milliseconds with a custom
//! ceiling, then answer SLO-style questions without rescanning.

use data_capture::{Capture, CaptureError};

fn main() -> Result<(), CaptureError> {
    let mut capture = Capture::with_max_value(5_000);

    // Deterministic pseudo-latencies between 1 and 2_000 ms.
    let mut state = 17u32;
    for _ in 0..50_000 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        capture.add(1 + (state >> 8) % 2_000)?;
    }

    let stats = capture.build();
    println!("requests: {}", stats.total());
    println!("under 100ms: {}", stats.less(100)?);
    println!("100ms..=500ms: {}", stats.between(100, 500)?);
    println!("slower than 1s: {}", stats.greater(1_000)?);
    // Past the ceiling everything is below.
    println!("under 10s: {}", stats.less(10_000)?);
    Ok(())
}
