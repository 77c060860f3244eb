#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Route crate logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deterministic, moderately compressible payload: words from a small
/// vocabulary interleaved with pseudo-random numbers.
pub fn text_payload(len: usize, seed: u64) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
        "india", "juliet", "kilo", "lima", "mike", "november", "oscar", "papa",
    ];
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut out = Vec::with_capacity(len + 32);
    while out.len() < len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let word = WORDS[(state >> 33) as usize % WORDS.len()];
        out.extend_from_slice(word.as_bytes());
        out.push(b' ');
        if (state >> 60) == 0 {
            out.extend_from_slice(format!("{} ", state % 100_000).as_bytes());
        }
    }
    out.truncate(len);
    out
}

/// Incompressible bytes.
pub fn noise_payload(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}

/// Valid frame that omits the content-size field.
pub fn frame_without_content_size(data: &[u8], level: i32) -> Vec<u8> {
    let mut cctx = zstd_safe::CCtx::create();
    cctx.set_parameter(zstd_safe::CParameter::ContentSizeFlag(false)).unwrap();
    cctx.set_parameter(zstd_safe::CParameter::CompressionLevel(level)).unwrap();
    let mut out = Vec::with_capacity(zstd_safe::compress_bound(data.len()));
    cctx.compress2(&mut out, data).unwrap();
    out
}

/// Trained dictionary over JSON-like records of the given flavor.
pub fn trained_dictionary(flavor: &str, dict_size: usize) -> Vec<u8> {
    let samples: Vec<Vec<u8>> = (0..2000u32)
        .map(|i| {
            format!(
                "{{\"kind\":\"{}\",\"id\":{},\"name\":\"{}-{}\",\"tags\":[\"{}\",\"{}\"],\"score\":{}}}",
                flavor,
                i,
                flavor,
                i % 97,
                if i % 3 == 0 { "hot" } else { "cold" },
                if i % 5 == 0 { "new" } else { "old" },
                (i * 7919) % 1000
            )
            .into_bytes()
        })
        .collect();
    zstd::dict::from_samples(&samples, dict_size).unwrap()
}

pub fn record(flavor: &str, i: u32) -> Vec<u8> {
    format!(
        "{{\"kind\":\"{}\",\"id\":{},\"name\":\"{}-{}\",\"tags\":[\"hot\",\"new\"],\"score\":{}}}",
        flavor,
        i,
        flavor,
        i % 97,
        (i * 31) % 1000
    )
    .into_bytes()
}
