//! Basic in-memory splitting example.
//!
//! Run with:
//!     cargo run --example split_basic

use splitrs::fold::map_err;
use splitrs::{EmptyChunks, Separator, SplitConfig, Splitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let csv_row = b"17,,42,8";

    // Feed bytes as they arrive; chunks come back once their separator is seen.
    let mut splitter = Splitter::new(SplitConfig::new(Separator::from_static(b",")));
    let mut fields = Vec::new();
    for &byte in csv_row {
        if let Some(field) = splitter.push_byte(byte) {
            println!("field: {:?}", String::from_utf8_lossy(&field));
            fields.push(field);
        }
    }
    fields.extend(splitter.finish());
    println!("{} fields (empty one included)\n", fields.len());

    // Same row, empty fields dropped.
    let config = SplitConfig::new(Separator::from_static(b","))
        .with_empty_chunks(EmptyChunks::Skip);
    let mut splitter = Splitter::new(config);
    let mut fields = splitter.push(csv_row);
    fields.extend(splitter.finish());

    // Parse every field, stopping at the first bad one.
    let numbers = map_err(&fields, |field, _| -> Result<u32, Box<dyn std::error::Error>> {
        Ok(std::str::from_utf8(field)?.parse::<u32>()?)
    })
    .map_err(|e| format!("field {} is not a number: {}", e.index, e.error))?;

    println!("parsed: {:?}", numbers);
    println!("sum: {}", numbers.iter().sum::<u32>());

    Ok(())
}
