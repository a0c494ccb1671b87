//! File splitting example.
//!
//! Run with:
//!     cargo run --example split_file -- /path/to/file [separator]
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the library's events.

use std::env;

use splitrs::util::fs::{ensure_file_exists, full_path};
use splitrs::util::text::trim_blank;
use splitrs::{SplitConfig, split_file};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Colorized console logging, filter taken from `RUST_LOG` (default INFO).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());
    let separator = env::args().nth(2).unwrap_or_else(|| "\n".to_string());

    let path = full_path(&path)?;
    ensure_file_exists(&path)?;
    info!(path = %path.display(), separator = ?separator, "splitting");

    let config = SplitConfig::with_separator(separator)?;

    let mut longest = 0usize;
    let mut blank = 0usize;
    let summary = split_file(&path, &config, |chunk| {
        longest = longest.max(chunk.len());
        if trim_blank(&String::from_utf8_lossy(&chunk)).is_empty() {
            blank += 1;
        }
        Ok::<_, std::convert::Infallible>(())
    })?;

    info!(
        chunks = summary.chunks,
        bytes = summary.bytes,
        longest,
        blank,
        "done"
    );
    if summary.chunks > 0 {
        info!("average chunk size: {} bytes", summary.bytes / summary.chunks as u64);
    }

    Ok(())
}
