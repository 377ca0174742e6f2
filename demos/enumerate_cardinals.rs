use numwords::cardinal;
use std::error::Error;

/// Walk the cardinal grammar and print the front of the enumeration
fn main() -> Result<(), Box<dyn Error>> {
    let grammar = cardinal::grammar()?;

    println!("First 40 phrases at depth 6:");
    for (i, sentence) in grammar.sentences(6).take(40).enumerate() {
        println!("{}. {}", i + 1, sentence);
    }

    println!("\nThe complete depth-4 language:");
    for sentence in grammar.sentences(4) {
        println!("  {}", sentence);
    }

    Ok(())
}
