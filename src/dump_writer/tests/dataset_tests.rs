//! Tests for the dataset collaborator

use super::super::dataset::{CoordinateAxis, DumpDataset, DumpSource};
use crate::constants::COORDINATE_FIELDS;

#[test]
fn test_axis_names_match_dump_order() {
    let names: Vec<&str> = CoordinateAxis::ALL.iter().map(|axis| axis.name()).collect();

    assert_eq!(names, COORDINATE_FIELDS);
}

#[test]
fn test_coordinates_default_to_empty() {
    let dataset = DumpDataset::new();

    for axis in CoordinateAxis::ALL {
        assert!(dataset.coordinate(axis).is_empty());
    }
    assert!(dataset.is_empty());
}

#[test]
fn test_set_coordinate_round_trip() {
    let mut dataset = DumpDataset::new();
    dataset.set_coordinate(CoordinateAxis::X2L, vec![0.0, 0.5]);

    assert_eq!(dataset.coordinate(CoordinateAxis::X2L), &[0.0, 0.5]);
    assert!(dataset.coordinate(CoordinateAxis::X2).is_empty());
}

#[test]
fn test_builder_chains() {
    let dataset = DumpDataset::new()
        .with_coordinate(CoordinateAxis::X1, vec![0.0, 1.0])
        .with_field("RHO", vec![1.0, 2.0])
        .with_field("PRS", vec![0.1, 0.2]);

    assert_eq!(dataset.coordinate(CoordinateAxis::X1), &[0.0, 1.0]);
    assert_eq!(dataset.len(), 2);
    assert!(dataset.field("RHO").is_some());
}

#[test]
fn test_field_insertion_order_is_kept() {
    let mut dataset = DumpDataset::new();
    dataset.insert_field("VX3", vec![0.0]);
    dataset.insert_field("RHO", vec![0.0]);
    dataset.insert_field("PRS", vec![0.0]);

    assert_eq!(dataset.field_names(), vec!["VX3", "RHO", "PRS"]);
}

#[test]
fn test_duplicate_field_replaces_value_in_place() {
    let mut dataset = DumpDataset::new();
    dataset.insert_field("RHO", vec![1.0]);
    dataset.insert_field("PRS", vec![2.0]);
    dataset.insert_field("RHO", vec![10.0, 20.0]);

    assert_eq!(dataset.field_names(), vec!["RHO", "PRS"]);
    assert_eq!(dataset.field("RHO").map(|f| f.len()), Some(2));
    assert_eq!(dataset.len(), 2);
}

#[test]
fn test_trait_iteration_matches_insertion_order() {
    let dataset = DumpDataset::new()
        .with_field("B", vec![0.0])
        .with_field("A", vec![0.0]);

    let source: &dyn DumpSource = &dataset;
    let names: Vec<&str> = source.fields().map(|(name, _)| name).collect();

    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_missing_field_lookup() {
    let dataset = DumpDataset::new();

    assert!(dataset.field("RHO").is_none());
}
