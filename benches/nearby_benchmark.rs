use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waste_finder::geo;
use waste_finder::models::{Station, StationType};

/// Build a synthetic grid of stations around the Bay Area.
fn synthetic_stations(count: usize) -> Vec<Station> {
    (0..count)
        .map(|i| {
            let row = (i / 100) as f64;
            let col = (i % 100) as f64;
            Station {
                id: None,
                name: format!("Station {}", i),
                station_type: StationType::Recycling,
                address: format!("{} Grid St", i),
                latitude: 36.0 + row * 0.01,
                longitude: -123.0 + col * 0.01,
                rating: None,
                review_count: 0,
                phone: None,
                website: None,
                hours: None,
                services: vec![],
                created_at: String::new(),
            }
        })
        .collect()
}

fn benchmark_nearby_scan(c: &mut Criterion) {
    let small = synthetic_stations(100);
    let large = synthetic_stations(10_000);

    let mut group = c.benchmark_group("nearby_scan");

    group.bench_function("sort_100_stations", |b| {
        b.iter(|| {
            geo::nearest(
                black_box(small.clone()),
                black_box(37.7749),
                black_box(-122.4194),
                10,
            )
        })
    });

    group.bench_function("sort_10k_stations", |b| {
        b.iter(|| {
            geo::nearest(
                black_box(large.clone()),
                black_box(37.7749),
                black_box(-122.4194),
                10,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_nearby_scan);
criterion_main!(benches);
