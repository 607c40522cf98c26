use sortrace::Gallery;

fn main() {
    let gallery = Gallery::new();
    let longest = gallery
        .panels()
        .iter()
        .map(|panel| panel.trace().len())
        .max()
        .unwrap_or(1);

    for tick in 0..longest {
        println!("tick {:>2}", tick);
        for (algorithm, frame) in gallery.frames(tick) {
            println!("  {:<14} {:?}", algorithm.label(), frame.values());
        }
    }
}
