// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod left_join_stream_bench;

use criterion::{criterion_group, criterion_main};
use left_join_stream_bench::bench_left_join_stream;

criterion_group!(stream_join_benches, bench_left_join_stream);
criterion_main!(stream_join_benches);
