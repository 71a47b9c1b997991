//! Capture on independent shards, then merge the counts and build once.

use data_capture::{Capture, CaptureError};

fn main() -> Result<(), CaptureError> {
    // Shard A takes even positions, shard B odd ones. Both share the default
    // ceiling so they can be merged.
    let mut shard_a = Capture::new();
    let mut shard_b = Capture::new();

    for id in 0..10_000u32 {
        let value = 1 + (id * 37) % 999;
        if id % 2 == 0 {
            shard_a.add(value)?;
        } else {
            shard_b.add(value)?;
        }
    }

    let mut aggregate = shard_a.clone();
    aggregate.merge_from(&shard_b);
    let stats = aggregate.build();

    println!("total: {}", stats.total());
    println!("between(250, 750): {}", stats.between(250, 750)?);

    // Merging is associative, so an empty capture can rebuild the same state.
    let mut rebuilt = Capture::new();
    rebuilt.merge_from(&shard_b);
    rebuilt.merge_from(&shard_a);
    println!(
        "rebuilt matches aggregate? {}",
        rebuilt.build().between(250, 750)? == stats.between(250, 750)?
    );
    Ok(())
}
