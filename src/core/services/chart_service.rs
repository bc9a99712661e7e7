//! Donut chart geometry: turns category spend into arc segments.
//!
//! Angles are in degrees, measured from the positive x axis and growing
//! clockwise in screen coordinates (y points down). Every entry takes part in
//! the angle sweep, so zero-spend entries produce zero-length arcs in place.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryEntry, ColorToken};

/// Circle the chart is drawn on, plus the canvas it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    pub radius: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub stroke_width: f64,
    pub canvas: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            radius: 120.0,
            center_x: 150.0,
            center_y: 150.0,
            stroke_width: 12.0,
            canvas: 300.0,
        }
    }
}

impl ChartGeometry {
    /// Point on the circle at `degrees`.
    pub fn point_at(&self, degrees: f64) -> Point {
        let radians = degrees * std::f64::consts::PI / 180.0;
        Point {
            x: self.center_x + self.radius * radians.cos(),
            y: self.center_y + self.radius * radians.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One slice of the donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub name: String,
    pub color: ColorToken,
    /// Share of total spend, 0..=100.
    pub population: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
    pub radius: f64,
}

impl ArcSegment {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_empty(&self) -> bool {
        self.population == 0.0
    }

    /// SVG path command: move to the start point, then a clockwise circular
    /// arc to the end point.
    pub fn path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 {} 1 {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub name: String,
    pub color: ColorToken,
    pub population: f64,
}

/// Result of mapping a category list onto the donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DonutChart {
    /// Nothing was spent in the period; there is no meaningful chart.
    Empty,
    Ring {
        total_spend: f64,
        segments: Vec<ArcSegment>,
        legend: Vec<LegendItem>,
    },
}

impl DonutChart {
    pub fn is_empty(&self) -> bool {
        matches!(self, DonutChart::Empty)
    }

    pub fn segments(&self) -> &[ArcSegment] {
        match self {
            DonutChart::Empty => &[],
            DonutChart::Ring { segments, .. } => segments,
        }
    }

    pub fn legend(&self) -> &[LegendItem] {
        match self {
            DonutChart::Empty => &[],
            DonutChart::Ring { legend, .. } => legend,
        }
    }
}

pub struct ChartService;

impl ChartService {
    /// Maps entries, in list order, onto consecutive arcs proportional to
    /// their spend. Income is ignored. A list with no spend yields
    /// [`DonutChart::Empty`].
    pub fn build(entries: &[CategoryEntry], geometry: &ChartGeometry) -> DonutChart {
        let total_spend: f64 = entries.iter().map(|entry| entry.spend).sum();
        if total_spend == 0.0 || !total_spend.is_finite() {
            tracing::debug!(entries = entries.len(), "no spend to chart");
            return DonutChart::Empty;
        }

        let mut start_angle = 0.0;
        let mut segments = Vec::with_capacity(entries.len());
        for entry in entries {
            let population = entry.spend / total_spend * 100.0;
            let share = population / 100.0;
            let end_angle = start_angle + share * 360.0;
            segments.push(ArcSegment {
                name: entry.name.clone(),
                color: entry.color.clone(),
                population,
                start_angle,
                end_angle,
                start: geometry.point_at(start_angle),
                end: geometry.point_at(end_angle),
                large_arc: share > 0.5,
                radius: geometry.radius,
            });
            start_angle = end_angle;
        }

        let legend = entries
            .iter()
            .zip(&segments)
            .filter(|(entry, _)| entry.spend > 0.0)
            .map(|(entry, segment)| LegendItem {
                name: entry.name.clone(),
                color: entry.color.clone(),
                population: segment.population,
            })
            .collect();

        DonutChart::Ring {
            total_spend,
            segments,
            legend,
        }
    }

    /// Renders the chart as a standalone SVG document.
    ///
    /// A segment covering the whole circle starts and ends on the same point,
    /// which an SVG arc cannot draw, so it is emitted as a circle instead.
    pub fn render_svg(chart: &DonutChart, geometry: &ChartGeometry) -> String {
        let size = geometry.canvas;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
        );
        for segment in chart.segments() {
            if segment.is_empty() {
                continue;
            }
            if segment.span() >= 360.0 {
                let _ = writeln!(
                    svg,
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"transparent\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    geometry.center_x,
                    geometry.center_y,
                    geometry.radius,
                    segment.color,
                    geometry.stroke_width
                );
            } else {
                let _ = writeln!(
                    svg,
                    "  <path d=\"{}\" fill=\"transparent\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    segment.path(),
                    segment.color,
                    geometry.stroke_width
                );
            }
        }
        svg.push_str("</svg>\n");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend(name: &str, amount: f64) -> CategoryEntry {
        CategoryEntry::new(name, "icon", "#FF6384").with_spend(amount)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn even_split_spans_half_circle_each_without_large_arc() {
        let chart = ChartService::build(
            &[spend("a", 50.0), spend("b", 50.0)],
            &ChartGeometry::default(),
        );
        let segments = chart.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].span(), 180.0);
        assert_eq!(segments[1].span(), 180.0);
        assert_eq!(segments[1].end_angle, 360.0);
        assert!(segments.iter().all(|segment| !segment.large_arc));
    }

    #[test]
    fn slice_over_half_sets_large_arc() {
        let chart = ChartService::build(
            &[spend("a", 75.0), spend("b", 25.0)],
            &ChartGeometry::default(),
        );
        assert!(chart.segments()[0].large_arc);
        assert!(!chart.segments()[1].large_arc);
        assert!(chart.segments()[0].path().contains(" 0 1 1 "));
    }

    #[test]
    fn endpoints_follow_circle_formula() {
        let geometry = ChartGeometry::default();
        let chart = ChartService::build(&[spend("a", 25.0), spend("b", 75.0)], &geometry);
        let first = &chart.segments()[0];
        assert_eq!(first.start, Point { x: 270.0, y: 150.0 });
        assert!(close(first.end.x, 150.0));
        assert!(close(first.end.y, 270.0));
    }

    #[test]
    fn zero_spend_entries_keep_position_but_leave_legend() {
        let salary = CategoryEntry::new("Зарплата", "cash-outline", "#EE0ADF").with_income(2700.0);
        let chart = ChartService::build(
            &[spend("a", 60.0), salary, spend("b", 40.0)],
            &ChartGeometry::default(),
        );
        let segments = chart.segments();
        assert_eq!(segments.len(), 3);
        assert!(segments[1].is_empty());
        assert_eq!(segments[1].start_angle, segments[1].end_angle);
        assert_eq!(segments[2].start_angle, segments[1].end_angle);
        let legend: Vec<&str> = chart.legend().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(legend, vec!["a", "b"]);
    }

    #[test]
    fn no_spend_yields_empty_chart() {
        let salary = CategoryEntry::new("Зарплата", "cash-outline", "#EE0ADF").with_income(2700.0);
        assert!(ChartService::build(&[salary], &ChartGeometry::default()).is_empty());
        assert!(ChartService::build(&[], &ChartGeometry::default()).is_empty());
    }

    #[test]
    fn svg_contains_one_path_per_visible_segment() {
        let geometry = ChartGeometry::default();
        let salary = CategoryEntry::new("Зарплата", "cash-outline", "#EE0ADF").with_income(10.0);
        let chart = ChartService::build(&[spend("a", 30.0), salary, spend("b", 70.0)], &geometry);
        let svg = ChartService::render_svg(&chart, &geometry);
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 300 300\""));
        assert!(svg.contains("stroke-width=\"12\""));
    }

    #[test]
    fn single_full_slice_renders_as_circle() {
        let geometry = ChartGeometry::default();
        let chart = ChartService::build(&[spend("a", 10.0)], &geometry);
        let svg = ChartService::render_svg(&chart, &geometry);
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }
}
