use nanorand::{Rng, WyRand};

/// Draw `count` distinct values uniformly from `1..=max`, in random order.
///
/// Fresh input for a trace-consuming view; distinct values keep every bar in
/// the rendered chart a different height.
pub fn sample_values(count: usize, max: u32) -> Vec<u32> {
    assert!(
        count as u64 <= max as u64,
        "cannot draw {} distinct values from 1..={}",
        count,
        max
    );

    let mut pool: Vec<u32> = (1..=max).collect();
    let mut rng = WyRand::new();
    let mut values = Vec::with_capacity(count);

    for _ in 0..count {
        let idx = rng.generate_range(0..pool.len());
        values.push(pool.swap_remove(idx));
    }

    values
}
