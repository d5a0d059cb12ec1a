//! End-to-end tests for the aggregation pipeline and lineage resolution,
//! running from raw JSON tables through to map-ready counts.

use mgi_rust::api::{
    compute_world_map_data, parse_dataset_json_str, resolve_lineage, AcademicId, AdvisingGraph,
    DegreeId, LocationKey, WindowingSettings, YearWindow,
};

const DATASET_JSON: &str = r#"{
    "degrees": [
        { "id": 1, "academic": 10, "year": 1885, "school": 100 },
        { "id": 2, "academic": 11, "year": 1902, "school": 100 },
        { "id": 3, "academic": 12, "year": 1904, "school": 101 },
        { "id": 4, "academic": 13, "year": 1911, "school": 101 },
        { "id": 5, "academic": 14, "year": -1,   "school": 100 },
        { "id": 6, "academic": 15, "year": 1930, "school": 999 }
    ],
    "schools": [
        { "id": 100, "name": "Göttingen", "latitude": 51.54, "longitude": 9.93 },
        { "id": 101, "name": "Sorbonne",  "latitude": 48.85, "longitude": 2.35 }
    ],
    "advises": [
        { "advisor": 10, "advisee": 11 },
        { "advisor": 10, "advisee": 12 },
        { "advisor": 11, "advisee": 13 },
        { "advisor": 12, "advisee": 13 }
    ]
}"#;

fn windowing(first: i32, last: i32, increment: i32, overlap_step: i32) -> WindowingSettings {
    WindowingSettings {
        first,
        last,
        increment,
        overlap_step,
    }
}

#[test]
fn full_pipeline_over_disjoint_decades() {
    let dataset = parse_dataset_json_str(DATASET_JSON).unwrap();
    let data = compute_world_map_data(&dataset, &windowing(1880, 1940, 10, 10)).unwrap();

    assert_eq!(data.windows.len(), 6);
    // Five dated degrees binned once each (the undated one is dropped);
    // degree 6 points at a missing school.
    assert_eq!(data.total_count, 5);
    assert_eq!(data.error_count, 1);

    let goettingen = LocationKey::new(9.93, 51.54);
    let sorbonne = LocationKey::new(2.35, 48.85);

    let w1880 = YearWindow::new(1880, 1890);
    let w1900 = YearWindow::new(1900, 1910);
    let w1910 = YearWindow::new(1910, 1920);
    let w1930 = YearWindow::new(1930, 1940);

    assert_eq!(data.location_counts[&w1880][&goettingen], 1);
    assert_eq!(data.location_counts[&w1900][&goettingen], 1);
    assert_eq!(data.location_counts[&w1900][&sorbonne], 1);
    assert_eq!(data.location_counts[&w1910][&sorbonne], 1);
    assert!(data.location_counts[&w1930].is_empty());

    let cumulative = data.cumulative_counts.as_ref().unwrap();
    assert_eq!(cumulative[&w1880][&goettingen], 1);
    assert_eq!(cumulative[&w1910][&goettingen], 2);
    assert_eq!(cumulative[&w1910][&sorbonne], 2);
    assert_eq!(cumulative[&w1930][&goettingen], 2);
    assert_eq!(cumulative[&w1930][&sorbonne], 2);
}

#[test]
fn overlapping_windows_bin_twice_and_skip_cumulative() {
    let dataset = parse_dataset_json_str(DATASET_JSON).unwrap();
    let data = compute_world_map_data(&dataset, &windowing(1900, 1912, 10, 5)).unwrap();

    assert!(data.cumulative_counts.is_none());

    // 1911 lies in the overlap of [1905,1915) and [1910,1920) and is
    // counted in both; 1904 lies in [1900,1910) alone.
    let w1900 = YearWindow::new(1900, 1910);
    let w1905 = YearWindow::new(1905, 1915);
    let w1910 = YearWindow::new(1910, 1920);
    let sorbonne = LocationKey::new(2.35, 48.85);

    assert_eq!(data.location_counts[&w1900][&sorbonne], 1);
    assert_eq!(data.location_counts[&w1905][&sorbonne], 1);
    assert_eq!(data.location_counts[&w1910][&sorbonne], 1);
}

#[test]
fn pipeline_is_idempotent() {
    let dataset = parse_dataset_json_str(DATASET_JSON).unwrap();
    let spec = windowing(1880, 1940, 9, 10);

    let first = compute_world_map_data(&dataset, &spec).unwrap();
    let second = compute_world_map_data(&dataset, &spec).unwrap();

    assert_eq!(first.windows, second.windows);
    assert_eq!(first.total_count, second.total_count);
    assert_eq!(first.error_count, second.error_count);
    assert_eq!(first.school_counts, second.school_counts);
    assert_eq!(first.location_counts, second.location_counts);
    assert_eq!(first.cumulative_counts, second.cumulative_counts);
}

#[test]
fn lineage_from_parsed_tables() {
    let dataset = parse_dataset_json_str(DATASET_JSON).unwrap();
    let graph = AdvisingGraph::from_edges(dataset.edges());

    // 13 sits under a diamond: advised by 11 and 12, both advised by 10.
    let lineage = resolve_lineage(AcademicId(13), &graph, &dataset);

    assert_eq!(lineage.ancestor_count, 4);
    assert_eq!(lineage.descendant_count, 0);
    assert_eq!(
        lineage.degrees.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![DegreeId(1), DegreeId(2), DegreeId(3), DegreeId(4)]
    );

    // The root's ancestor closure is just itself; its descendants cover
    // everyone below, so all four degrees appear here too.
    let root = resolve_lineage(AcademicId(10), &graph, &dataset);
    assert_eq!(root.ancestor_count, 1);
    assert_eq!(root.descendant_count, 3);
    assert_eq!(root.degrees.len(), 4);
}
