use bucketchart_projectors::{BucketProjector, FacetProjector, TimeSeriesProjector};
use bucketchart_types::{Bucket, BucketResponse, Metric};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a grouped time-series response with `slots` time slots and
/// `groups` groups per slot, every third group missing from odd slots.
fn grouped_response(slots: usize, groups: usize) -> BucketResponse {
    let mut metric = Metric::new("HTTP_REQUESTS");
    for slot in 0..slots {
        let ts = 1_735_689_600_000.0 + (slot as f64) * 60_000.0;
        let mut builder = Bucket::builder(format!("{ts}")).timestamp(ts);
        for group in 0..groups {
            if slot % 2 == 1 && group % 3 == 0 {
                continue;
            }
            builder = builder.bucket(format!("group-{group}"), |g| {
                g.measure("COUNT", (slot * groups + group) as f64)
            });
        }
        metric.buckets.push(builder.build());
    }
    BucketResponse::builder().push(metric).build()
}

/// Build a simple time-series response with `metrics` metrics of `slots` slots.
fn simple_response(metrics: usize, slots: usize) -> BucketResponse {
    let mut builder = BucketResponse::builder();
    for m in 0..metrics {
        builder = builder.metric(format!("METRIC_{m}"), |mb| {
            (0..slots).fold(mb, |mb, slot| {
                let ts = 1_735_689_600_000.0 + (slot as f64) * 60_000.0;
                mb.bucket(format!("{ts}"), |b| b.timestamp(ts).measure("COUNT", slot as f64))
            })
        });
    }
    builder.build()
}

/// Build a facet response with `categories` categories, a tenth of them empty.
fn facet_response(categories: usize) -> BucketResponse {
    BucketResponse::builder()
        .metric("HTTP_REQUESTS", |m| {
            (0..categories).fold(m, |m, c| {
                m.bucket(format!("cat-{c}"), |b| {
                    if c % 10 == 0 {
                        b
                    } else {
                        b.measure("COUNT", c as f64)
                    }
                })
            })
        })
        .build()
}

/// Benchmark grouped time-series projection at increasing group counts
fn bench_grouped_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouped_time_series");
    let projector = TimeSeriesProjector::new();

    for groups in [1usize, 10, 50, 200].iter() {
        let response = grouped_response(288, *groups);
        group.bench_with_input(BenchmarkId::from_parameter(groups), &response, |b, response| {
            b.iter(|| projector.project(black_box(response)));
        });
    }
    group.finish();
}

/// Benchmark multi-metric projection with the strict axis check
fn bench_simple_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple_time_series");
    let projector = TimeSeriesProjector::new();

    for metrics in [1usize, 4, 16].iter() {
        let response = simple_response(*metrics, 288);
        group.bench_with_input(BenchmarkId::from_parameter(metrics), &response, |b, response| {
            b.iter(|| projector.project(black_box(response)));
        });
    }
    group.finish();
}

/// Benchmark facet projection
fn bench_facets(c: &mut Criterion) {
    let projector = FacetProjector::new();
    let response = facet_response(500);

    c.bench_function("facets_500", |b| {
        b.iter(|| projector.project(black_box(&response)));
    });
}

criterion_group!(
    benches,
    bench_grouped_time_series,
    bench_simple_time_series,
    bench_facets
);
criterion_main!(benches);
