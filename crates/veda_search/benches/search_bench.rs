use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use veda_ephem::AnalyticEphemeris;
use veda_search::{
    BirthData, ChartConfig, SearchConfig, calculate_chart, find_date, observation_for_date,
};

fn chart_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let birth = BirthData::new(1990, 1, 15, 10, 30, 28.6139, 77.2090);
    let config = ChartConfig {
        dasha_reference_jd: Some(2_460_000.5),
        ..ChartConfig::default()
    };

    c.bench_function("calculate_chart", |b| {
        b.iter(|| {
            calculate_chart(black_box(&eph), black_box(&birth), black_box(&config))
                .expect("chart should compute")
        })
    });
}

fn date_search_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let day = NaiveDate::from_ymd_opt(1989, 2, 2).expect("valid date");
    let obs = observation_for_date(&eph, day, 0.0).expect("observation should compute");
    let parallel = SearchConfig::default();
    let serial = SearchConfig {
        parallel: false,
        ..SearchConfig::default()
    };

    let mut group = c.benchmark_group("find_date");
    group.sample_size(10);
    group.bench_function("parallel_1960_2000", |b| {
        b.iter(|| {
            find_date(black_box(&eph), black_box(&obs), black_box(&parallel))
                .expect("search should succeed")
                .expect("match should exist")
        })
    });
    group.bench_function("serial_1960_2000", |b| {
        b.iter(|| {
            find_date(black_box(&eph), black_box(&obs), black_box(&serial))
                .expect("search should succeed")
                .expect("match should exist")
        })
    });
    group.finish();
}

criterion_group!(benches, chart_bench, date_search_bench);
criterion_main!(benches);
