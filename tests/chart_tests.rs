mod common;

use common::{september, spend};
use regex::Regex;
use spendsphere_core::{
    core::services::{ChartGeometry, ChartService, DonutChart, ScreenService},
    domain::{AccountSelector, CardAccount},
    storage::builtin,
};

fn path_numbers(path: &str) -> Vec<f64> {
    let re = Regex::new(r"-?\d+(?:\.\d+)?(?:e-?\d+)?").unwrap();
    re.find_iter(path)
        .map(|m| m.as_str().parse().unwrap())
        .collect()
}

#[test]
fn half_and_half_split_uses_small_arcs() {
    let geometry = ChartGeometry::default();
    let chart = ChartService::build(
        &[spend("a", 50.0, &[]), spend("b", 50.0, &[])],
        &geometry,
    );
    let segments = chart.segments();
    let total: f64 = segments.iter().map(|segment| segment.span()).sum();
    assert!((total - 360.0).abs() < 1e-9);
    for segment in segments {
        assert!((segment.span() - 180.0).abs() < 1e-9);
        assert!(!segment.large_arc);
    }

    // M x1 y1 A r r 0 large sweep x2 y2
    let numbers = path_numbers(&segments[0].path());
    assert_eq!(numbers.len(), 9);
    assert!((numbers[0] - 270.0).abs() < 1e-9);
    assert!((numbers[1] - 150.0).abs() < 1e-9);
    assert_eq!(numbers[2], 120.0);
    assert_eq!(numbers[5], 0.0);
    assert_eq!(numbers[6], 1.0);
    assert!((numbers[7] - 30.0).abs() < 1e-9);
    assert!((numbers[8] - 150.0).abs() < 1e-6);
}

#[test]
fn slice_over_half_sets_large_arc_flag() {
    let chart = ChartService::build(
        &[spend("big", 70.0, &[]), spend("small", 30.0, &[])],
        &ChartGeometry::default(),
    );
    let flags: Vec<bool> = chart.segments().iter().map(|s| s.large_arc).collect();
    assert_eq!(flags, vec![true, false]);
    let numbers = path_numbers(&chart.segments()[0].path());
    assert_eq!(numbers[5], 1.0);
}

#[test]
fn zero_spend_entries_keep_their_place_but_leave_the_legend() {
    let chart = ChartService::build(
        &[
            spend("a", 30.0, &[]),
            spend("nothing", 0.0, &[]),
            spend("b", 70.0, &[]),
        ],
        &ChartGeometry::default(),
    );
    let segments = chart.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1].span(), 0.0);
    assert_eq!(segments[1].start_angle, segments[0].end_angle);
    let legend: Vec<&str> = chart.legend().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(legend, vec!["a", "b"]);
}

#[test]
fn no_spend_means_no_chart() {
    let chart = ChartService::build(&[], &ChartGeometry::default());
    assert_eq!(chart, DonutChart::Empty);
    let svg = ChartService::render_svg(&chart, &ChartGeometry::default());
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("NaN"));
}

#[test]
fn rendered_svg_has_one_path_per_spend_category() {
    let geometry = ChartGeometry::default();
    let view = ScreenService::home(
        builtin(),
        AccountSelector::Card(CardAccount::Mastercard),
        september(),
        &geometry,
    );
    let svg = ChartService::render_svg(&view.chart, &geometry);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 300 300\""));
    assert_eq!(svg.matches("<path").count(), 6);
    assert!(svg.contains("stroke=\"#FF6384\""));
}

#[test]
fn single_category_renders_as_full_circle() {
    let geometry = ChartGeometry::default();
    let chart = ChartService::build(&[spend("only", 10.0, &[])], &geometry);
    assert!(chart.segments()[0].large_arc);
    let svg = ChartService::render_svg(&chart, &geometry);
    assert!(svg.contains("<circle"));
    assert!(!svg.contains("<path"));
}
