use numwords::digitize;
use std::error::Error;
use std::io::{self, Write};

/// Rewrite a paragraph so its number phrases become digits
fn main() -> Result<(), Box<dyn Error>> {
    let text = "The ship carried twenty-three thousand four hundred and five \
                crates, a hundred barrels, and a million letters. Zero were \
                lost along the way.";

    println!("before: {}\n", text);

    print!("after:  ");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    digitize::digitize(text, &mut out)?;
    writeln!(out)?;

    Ok(())
}
