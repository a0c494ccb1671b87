#![no_main]

use libfuzzer_sys::fuzz_target;
use splitrs::{Separator, SplitConfig, Splitter};

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (sep, data) = input;
    let Ok(separator) = Separator::new(sep.clone()) else {
        return;
    };

    let mut splitter = Splitter::new(SplitConfig::new(separator));
    let mut chunks = splitter.push(&data);
    let tail = splitter.finish();
    let closed = tail.is_none() && !data.is_empty();
    chunks.extend(tail);

    // Verify: every byte is accounted for, as content or as a separator
    let content: usize = chunks.iter().map(|c| c.len()).sum();
    let separators = if closed { chunks.len() } else { chunks.len().saturating_sub(1) };
    assert_eq!(content + separators * sep.len(), data.len());

    // Verify: rejoining reconstructs the input
    let mut joined = Vec::with_capacity(data.len());
    for (i, chunk) in chunks.iter().enumerate() {
        if i > 0 {
            joined.extend_from_slice(&sep);
        }
        joined.extend_from_slice(chunk);
    }
    if closed {
        joined.extend_from_slice(&sep);
    }
    assert_eq!(joined, data);
});
