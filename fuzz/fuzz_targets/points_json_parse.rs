//! Fuzz target for points-JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the corner-point
//! parser, checking for panics, crashes, or hangs.
//!
//! Run with:
//!   cargo +nightly fuzz run points_json_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use quadcrop::io_points::points_from_json_slice;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 1MB is generous for a corner-point list.
    if data.len() > 1024 * 1024 {
        return;
    }

    // Try to parse the data. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let _ = points_from_json_slice(data);
});
