// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use futures::stream::{self, StreamExt};
use leftjoin_stream::LeftJoinStreamExt;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn make_stream(
    size: usize,
    payload_size: usize,
) -> impl futures::Stream<Item = (u64, Vec<u8>)> + Send {
    let items: Vec<(u64, Vec<u8>)> = (0..size as u64)
        .map(|key| (key, vec![0u8; payload_size]))
        .collect();
    stream::iter(items)
}

pub fn bench_left_join_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("left_join_stream");
    let sizes = [1000usize, 10_000usize];
    let right_inputs_variants = [1usize, 3];

    let rt = Runtime::new().unwrap();

    for &size in &sizes {
        for &right_inputs in &right_inputs_variants {
            let id = BenchmarkId::from_parameter(format!("l{size}_r{right_inputs}"));
            group.throughput(Throughput::Elements((size * (right_inputs + 1)) as u64));
            group.bench_with_input(id, &(size, right_inputs), |bencher, &(size, right_inputs)| {
                bencher.iter(|| {
                    let join = (0..right_inputs).fold(
                        stream::iter(0..size as u64).left_join_by(|key: &u64| *key),
                        |join, _| join.with_right(make_stream(size, 32), |item: &(u64, Vec<u8>)| item.0),
                    );

                    rt.block_on(async move {
                        let mut join = join;
                        while let Some(row) = join.next().await {
                            black_box(row.ok());
                        }
                    });
                });
            });
        }
    }

    group.finish();
}
