use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gochara_vedic::{
    DashaDepth, DegreeRange, House, nakshatra_position, vimshottari_from_longitude,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 319.27;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("nakshatra_position", |b| {
        b.iter(|| nakshatra_position(black_box(lon)))
    });
    group.bench_function("house_from_longitude", |b| {
        b.iter(|| House::from_longitude(black_box(lon)))
    });
    group.bench_function("degree_range_contains", |b| {
        let range = DegreeRange::new(350.0, 30.0);
        b.iter(|| range.contains(black_box(lon)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_maha", |b| {
        b.iter(|| vimshottari_from_longitude(black_box(birth), black_box(319.27), DashaDepth::Maha))
    });
    group.bench_function("vimshottari_pratyantar", |b| {
        b.iter(|| {
            vimshottari_from_longitude(black_box(birth), black_box(319.27), DashaDepth::Pratyantar)
        })
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, dasha_bench);
criterion_main!(benches);
