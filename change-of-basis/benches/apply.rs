#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use change_of_basis::euclid::{default::Vector3D, Rotation3D};
use change_of_basis::{CaseNumber, EulerAngles, EulerCase, Frame, Matrix3};

pub fn classify_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("CaseNumber::from_frames", |b| {
        b.iter(|| CaseNumber::from_frames(black_box(Frame::BVH), black_box(Frame::UNREAL_3)))
    });
    group.bench_function("EulerCase::from_frames", |b| {
        b.iter(|| EulerCase::from_frames(black_box(Frame::BVH), black_box(Frame::UNREAL_3)))
    });
    group.bench_function("all pairs", |b| {
        b.iter(|| {
            for from in Frame::ALL {
                for to in Frame::ALL {
                    black_box(CaseNumber::from_frames(from, to));
                }
            }
        })
    });

    group.finish();
}

pub fn apply_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.throughput(Throughput::Elements(1));

    // A reflection with a nontrivial permutation and signs, so no branch is skipped.
    let case = CaseNumber::from_frames(Frame::KINECT, Frame::BVH_BLENDER);
    let euler_case = EulerCase::from_frames(Frame::KINECT, Frame::BVH_BLENDER);

    let matrix = Matrix3::from_rows([[0.1, 0.2, 0.3], [0.4, 0.5, 0.6], [0.7, 0.8, 0.9]]);
    group.bench_function(BenchmarkId::new("matrix", case), |b| {
        b.iter(|| black_box(case).transform_matrix(black_box(matrix)))
    });

    group.bench_function(BenchmarkId::new("vector", case), |b| {
        b.iter(|| black_box(case).transform_vector(black_box(Vector3D::new(1.0, 2.0, 3.0))))
    });

    let q = Rotation3D::<f64, (), ()>::quaternion(0.1, 0.2, 0.3, 0.927);
    group.bench_function(BenchmarkId::new("quaternion", case), |b| {
        b.iter(|| black_box(case).transform_quaternion(black_box(q)))
    });

    group.bench_function(BenchmarkId::new("euler", euler_case), |b| {
        b.iter(|| black_box(euler_case).transform(black_box(EulerAngles::new(0.1, 0.2, 0.3))))
    });

    group.finish();
}

criterion_group!(benches, classify_bench, apply_bench);
criterion_main!(benches);
