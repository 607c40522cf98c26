use sortrace::{Algorithm, Comparison};

fn main() {
    let comparison = Comparison::new(Algorithm::Bubble, Algorithm::Merge);

    for tick in 0..10 {
        let (left, right) = comparison.frames(tick);
        println!("tick {:>2}", tick);
        println!("  {:<14} {:?}", comparison.left().algorithm().label(), left.values());
        println!("  {:<14} {:?}", comparison.right().algorithm().label(), right.values());
    }

    let (left_time, right_time) = comparison.stopwatch();
    println!(
        "{}: {:?}, {}: {:?}",
        comparison.left().algorithm(),
        left_time,
        comparison.right().algorithm(),
        right_time
    );
}
