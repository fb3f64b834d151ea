use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solar_facade::{
    EventSearch, PathSampling, SeasonalDay, SolarQuery, compute_solar_position, find_sun_events,
    sun_path,
};
use std::hint::black_box;

const LATITUDE: f64 = 48.8566;
const LONGITUDE: f64 = 2.3522;

fn benchmark_single_position(c: &mut Criterion) {
    let query = SolarQuery::new(172, 14.5, LATITUDE, LONGITUDE).with_facade_orientation(225.0);

    c.bench_function("position_single", |b| {
        b.iter(|| compute_solar_position(black_box(&query)))
    });
}

fn benchmark_daily_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_time_series");

    for &samples_per_hour in &[4_u32, 12, 60] {
        // slider sweeps: quarter hours, 5 minutes, every minute
        let count = 24 * samples_per_hour;
        group.throughput(Throughput::Elements(u64::from(count)));

        let queries: Vec<SolarQuery> = (0..count)
            .map(|i| {
                SolarQuery::new(
                    172,
                    f64::from(i) / f64::from(samples_per_hour),
                    LATITUDE,
                    LONGITUDE,
                )
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("position", count), &count, |b, _| {
            b.iter(|| {
                for query in &queries {
                    black_box(compute_solar_position(black_box(query)));
                }
            })
        });
    }

    group.finish();
}

fn benchmark_sun_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("sun_events");

    for &step in &[0.25, 1.0, 2.0] {
        let search = EventSearch::new(step);
        group.bench_with_input(BenchmarkId::new("paris_solstice", step), &search, |b, search| {
            b.iter(|| {
                find_sun_events(
                    black_box(172),
                    black_box(LATITUDE),
                    black_box(LONGITUDE),
                    black_box(0.0),
                    search,
                )
            })
        });
    }

    group.bench_function("polar_day", |b| {
        b.iter(|| {
            find_sun_events(
                black_box(172),
                black_box(69.6492),
                black_box(18.9553),
                black_box(0.0),
                &EventSearch::default(),
            )
        })
    });

    group.throughput(Throughput::Elements(365));
    group.bench_function("full_year", |b| {
        b.iter(|| {
            for day in 1..=365 {
                black_box(find_sun_events(
                    day,
                    LATITUDE,
                    LONGITUDE,
                    0.0,
                    &EventSearch::default(),
                ));
            }
        })
    });

    group.finish();
}

fn benchmark_sun_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("sun_paths");

    group.bench_function("seasonal_set", |b| {
        b.iter(|| {
            for day in SeasonalDay::ALL {
                black_box(day.path(black_box(LATITUDE)).count());
            }
        })
    });

    let fine = PathSampling::new(0.0, 24.0, 1.0 / 60.0);
    group.throughput(Throughput::Elements(24 * 60 + 1));
    group.bench_function("minute_resolution", |b| {
        b.iter(|| black_box(sun_path(172, LATITUDE, LONGITUDE, &fine).count()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_position,
    benchmark_daily_time_series,
    benchmark_sun_events,
    benchmark_sun_paths
);
criterion_main!(benches);
