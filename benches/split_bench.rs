//! Benchmarks for splitrs.
//!
//! Run with:
//!     cargo bench

use std::io::Cursor;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use splitrs::{Separator, SplitConfig, Splitter, split_reader};

/// Deterministic text-like data with a newline roughly every 80 bytes.
fn lines(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| if i % 81 == 80 { b'\n' } else { b'a' + (i * 7 % 26) as u8 })
        .collect()
}

fn bench_separators(c: &mut Criterion) {
    let mut group = c.benchmark_group("separators");
    let size = 1024 * 1024;
    let data = lines(size);

    group.throughput(Throughput::Bytes(size as u64));
    for sep in [&b"\n"[..], b"\r\n", b"<<END>>"] {
        let config = SplitConfig::new(Separator::new(sep.to_vec()).unwrap());
        group.bench_function(format!("sep_len_{}", sep.len()), |b| {
            b.iter(|| {
                let mut count = 0usize;
                split_reader(Cursor::new(black_box(&data)), &config, |_| {
                    count += 1;
                    Ok::<_, std::convert::Infallible>(())
                })
                .unwrap();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_apis(c: &mut Criterion) {
    let mut group = c.benchmark_group("apis");
    let size = 1024 * 1024;
    let data = lines(size);
    let config = SplitConfig::new(Separator::from_static(b"\n"));

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("push", |b| {
        b.iter(|| {
            let mut splitter = Splitter::new(config.clone());
            let chunks = splitter.push(black_box(&data));
            black_box(chunks.len() + splitter.finish().map_or(0, |_| 1))
        });
    });

    group.bench_function("iterator", |b| {
        b.iter(|| {
            let splitter = Splitter::new(config.clone());
            let mut count = 0;
            for chunk in splitter.split(Cursor::new(black_box(&data))) {
                let _ = chunk.unwrap();
                count += 1;
            }
            black_box(count)
        });
    });

    // Small read buffer: measures refill overhead.
    let small = config.clone().with_buffer_capacity(64);
    group.bench_function("callback_64b_buffer", |b| {
        b.iter(|| {
            split_reader(Cursor::new(black_box(&data)), &small, |chunk| {
                black_box(chunk);
                Ok::<_, std::convert::Infallible>(())
            })
            .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_separators, bench_apis);
criterion_main!(benches);
