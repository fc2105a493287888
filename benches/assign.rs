use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deferred::checked;
use deferred::prelude::*;

fn native(xs: &mut [u32], ys: &[u32]) {
    for (x, &y) in xs.iter_mut().zip(ys) {
        *x += y;
        *x <<= 1;
        *x ^= 0x5a5a;
    }
}

fn deferred(xs: &mut [u32], ys: &[u32]) {
    let step = bitxor_assign(shl_assign(add_assign(_0, _1), 1_u32), 0x5a5a_u32);
    for (x, &y) in xs.iter_mut().zip(ys) {
        let mut y = y;
        step.call((x, &mut y));
    }
}

fn deferred_checked(xs: &mut [u32], ys: &[u32]) -> Result<(), ArithmeticError> {
    let step = checked::bitxor_assign(
        checked::shl_assign(checked::add_assign(_0, _1), 1_u32),
        0x5a5a_u32,
    );
    for (x, &y) in xs.iter_mut().zip(ys) {
        let mut y = y;
        step.call((x, &mut y))?;
    }
    Ok(())
}

fn check_equal(xs: &[u32], ys: &[u32]) {
    let mut native_xs = xs.to_vec();
    native(&mut native_xs, ys);

    let mut deferred_xs = xs.to_vec();
    deferred(&mut deferred_xs, ys);
    assert_eq!(native_xs, deferred_xs);

    let mut checked_xs = xs.to_vec();
    assert_eq!(deferred_checked(&mut checked_xs, ys), Ok(()));
    assert_eq!(native_xs, checked_xs);
}

#[test]
fn unit_tests() {
    check_equal(&[], &[]);
    check_equal(&[1, 2, 3, 4], &[4, 3, 2, 1]);
}

fn benchmarks(c: &mut Criterion) {
    let xs: Vec<u32> = (1..).take(1_000_000).collect();
    let ys: Vec<u32> = xs.iter().rev().copied().collect();

    c.bench_function("native", |b| {
        b.iter_batched_ref(
            || xs.clone(),
            |xs| native(black_box(xs), black_box(&ys)),
            criterion::BatchSize::LargeInput,
        );
    });

    c.bench_function("deferred", |b| {
        b.iter_batched_ref(
            || xs.clone(),
            |xs| deferred(black_box(xs), black_box(&ys)),
            criterion::BatchSize::LargeInput,
        );
    });

    c.bench_function("deferred_checked", |b| {
        b.iter_batched_ref(
            || xs.clone(),
            |xs| deferred_checked(black_box(xs), black_box(&ys)),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(assign, benchmarks);
criterion_main!(assign);
