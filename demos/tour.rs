//! A guided tour of the two protocol families: drive some generators to
//! exhaustion by hand, then feed some accumulator chains.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example tour
//! ```

use either::Either;

use pullchain::*;

fn show<G>(label: &str, g: G)
where
    G: Generator,
    G::Item: std::fmt::Debug,
{
    let mut g = g;
    print!("{label}:");
    loop {
        match g.pull() {
            Value(v) => print!(" {v:?}"),
            Sentinel => {
                // One more pull past the end, to show exhaustion holding.
                assert!(g.pull().is_sentinel());
                println!(" <sentinel>");
                break;
            }
        }
    }
}

fn main() {
    // Leaves.
    show("range(0, 5)", range(0, 5));
    show("range(5, 5)", range(5, 5));

    let words = ["lazy", "sequences", "pulled", "on", "demand"];
    show("element(words)", element(&words));
    show("element_with(words, range(2, 5))", element_with(&words, range(2, 5)));

    // Adapters, chained the way iterator adapters chain.
    show("odd squares below 100", range(0, 10).map(|n| n * n).filter(|n| n % 2 == 1));
    show("1,2 then 0,1", range(1, 3).concat(range(0, 2)));

    // The collecting adapter tees into a caller-owned sink.
    let mut sink = Vec::new();
    range(1, 4).collect_into(&mut sink).for_each(|_| {});
    println!("collected sink: {sink:?}");

    // An infinite leaf, bounded through the iterator bridge.
    let fibs: Vec<i64> = fib(0, 1).into_iter().take(10).collect();
    println!("fib prefix: {fibs:?}");

    // Runtime choice between two generator shapes, one handle.
    let coin_flips = [true, false];
    for forward in coin_flips {
        let g = if forward {
            Either::Left(range(0, 3))
        } else {
            Either::Right(element(&words).map(|w| w.len()))
        };
        show("either branch", g);
    }

    // Accumulator chains: pushes fold in, an explicit finish closes the fold.
    println!("sum 3+4+5 = {:?}", sum_chain(Some(3)).push(4).push(5).finish());
    println!("sum never started = {:?}", sum_chain::<i64>(None).finish());
    println!("sum started at zero = {:?}", sum_chain(Some(0)).finish());

    let product = fold_chain(|acc: i64, v| acc * v).push(3).push(4).push(5).finish();
    println!("product 3*4*5 = {product:?}");

    println!("collected 3,4,5 = {:?}", collect_chain(Some(3)).push(4).push(5).finish());

    // The families compose: a generator drives a chain.
    let mut digits = collect_chain(None);
    range(0, 10).filter(|n| n % 3 != 0).for_each(|n| {
        digits.push(n);
    });
    println!("digits not divisible by three = {:?}", digits.finish());
}
