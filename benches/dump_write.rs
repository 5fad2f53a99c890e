//! Benchmarks for field serialization and end-to-end dump writing

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use idefix_tools::constants::HEADER_SIZE;
use idefix_tools::{CoordinateAxis, DumpDataset, FieldArray, FormatVersion, write_dump};
use ndarray::Array3;
use tempfile::TempDir;

/// A cubic float64 field with smoothly varying values
fn cube_field(n: usize) -> FieldArray {
    let values: Vec<f64> = (0..n * n * n).map(|i| (i as f64).sin()).collect();
    FieldArray::from(Array3::from_shape_vec((n, n, n), values).unwrap())
}

/// A dataset with a full grid and three cubic fields
fn cube_dataset(n: usize) -> DumpDataset {
    let centers: Vec<f64> = (0..n).map(|i| i as f64 / n as f64).collect();
    let mut dataset = DumpDataset::new();
    for axis in CoordinateAxis::ALL {
        dataset.set_coordinate(axis, centers.clone());
    }
    dataset
        .with_field("RHO", cube_field(n))
        .with_field("VX1", cube_field(n))
        .with_field("PRS", cube_field(n))
}

fn bench_packed_data(c: &mut Criterion) {
    let field = cube_field(64);

    c.bench_function("packed_data 64^3 float64", |b| {
        b.iter(|| black_box(&field).packed_data())
    });
}

fn bench_write_dump(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let header_path = dir.path().join("restart.dmp");
    std::fs::write(&header_path, [0u8; HEADER_SIZE]).unwrap();
    let output = dir.path().join("bench.dmp");
    let dataset = cube_dataset(64);

    c.bench_function("write_dump three 64^3 fields", |b| {
        b.iter(|| {
            write_dump(black_box(&dataset), &header_path, &output, FormatVersion::V2).unwrap()
        })
    });
}

criterion_group!(benches, bench_packed_data, bench_write_dump);
criterion_main!(benches);
