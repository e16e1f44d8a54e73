use criterion::{black_box, BenchmarkId, Criterion};

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// поиск по всем кодпоинтам из codes
pub fn bench<F>(c: &mut Criterion, group: &str, name: &str, codes: &[u32], lookup: F)
where
    F: Fn(u32) -> u32,
{
    let mut group = c.benchmark_group(group);

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    group.bench_with_input(BenchmarkId::new(name, codes.len()), codes, |b, codes| {
        b.iter(|| lookup_all(&lookup, black_box(codes)))
    });

    group.finish();
}

#[inline(never)]
fn lookup_all<F>(lookup: &F, codes: &[u32]) -> u64
where
    F: Fn(u32) -> u32,
{
    codes.iter().map(|&code| lookup(code) as u64).sum()
}
