use data_capture::{Capture, CaptureError};

fn main() -> Result<(), CaptureError> {
    let mut capture = Capture::new();
    for value in [3, 9, 3, 4, 6] {
        capture.add(value)?;
    }

    let stats = capture.build();
    println!("captured: {}", stats.total());
    println!("less(4) = {}", stats.less(4)?);
    println!("greater(4) = {}", stats.greater(4)?);
    println!("between(3, 6) = {}", stats.between(3, 6)?);

    println!("observed values:");
    for (value, rank) in stats.iter_ranks() {
        println!(
            "  {value}: count {} / below {} / above {}",
            rank.count, rank.less_than, rank.greater_than
        );
    }

    if let Err(err) = capture.add(1000) {
        println!("rejected: {err}");
    }
    Ok(())
}
