//! Example: spell-checking and completing against a small word list.
//!
//! Builds a graph from unsorted, mixed-case words and runs the three queries on it.
//! Pass a word list file as the first argument to use that instead.
//!
//! Run with: cargo run --example wordlist [-- words.txt]

use std::error::Error;

use wordgraph::Dawg;

fn main() -> Result<(), Box<dyn Error>> {
    let dawg = match std::env::args().nth(1) {
        Some(path) => Dawg::from_file(path)?,
        None => Dawg::from_words(["Bake", "BAKED", "baker", "cake", "Caked", "fake", "lake"])?,
    };

    println!(
        "{} words, {} states, {} transitions",
        dawg.len(),
        dawg.state_count(),
        dawg.transition_count()
    );

    // Word lookup
    println!("\nWord lookup:");
    for word in ["BAKE", "baker", "bakes", "Cake", "lake", "make"] {
        println!("  {word}: {}", if dawg.search(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["ba", "CAK", "ma", "fak"] {
        println!("  {prefix}*: {}", if dawg.prefix_exist(prefix) { "yes" } else { "no" });
    }

    // Completion
    println!("\nCompletions:");
    for prefix in ["bak", "ca", "z"] {
        println!("  {prefix}: {:?}", dawg.prefix_search(prefix));
    }

    Ok(())
}
