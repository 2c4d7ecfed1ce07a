// Example: the two exchange modes side by side.
use dragsort::{ExchangeMode, exchange};

fn main() {
    let items = ["a", "b", "c", "d", "e"];
    for (from, to) in [(0, 3), (3, 0), (1, 1)] {
        println!(
            "{from} -> {to}: simple={:?} close={:?}",
            exchange(&items, from, to, ExchangeMode::Simple),
            exchange(&items, from, to, ExchangeMode::Close)
        );
    }
    println!("input untouched: {items:?}");
}
