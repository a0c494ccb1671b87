#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use splitrs::{Separator, SplitConfig, Splitter, split_reader};

fuzz_target!(|input: (Vec<u8>, Vec<u8>, u8)| {
    let (sep, data, capacity) = input;
    let Ok(separator) = Separator::new(sep) else {
        return;
    };
    let config = SplitConfig::new(separator).with_buffer_capacity(usize::from(capacity).max(1));

    // Verify: callback driver, iterator and push engine agree
    let mut from_callback = Vec::new();
    let summary = split_reader(Cursor::new(&data), &config, |chunk| {
        from_callback.push(chunk);
        Ok::<_, std::convert::Infallible>(())
    })
    .unwrap();
    assert_eq!(summary.chunks, from_callback.len());
    assert_eq!(summary.bytes, data.len() as u64);

    let from_iter: Vec<_> = Splitter::new(config.clone())
        .split(Cursor::new(&data))
        .collect::<Result<_, _>>()
        .unwrap();

    let mut splitter = Splitter::new(config);
    let mut from_push = splitter.push(&data);
    from_push.extend(splitter.finish());

    assert_eq!(from_callback, from_iter);
    assert_eq!(from_callback, from_push);
});
