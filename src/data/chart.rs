use std::f64::consts::TAU;
use std::fmt;

use super::points::DataPoint;
use super::scale::nice_domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "Bar Chart"),
            ChartKind::Line => write!(f, "Line Chart"),
            ChartKind::Pie => write!(f, "Pie Chart"),
        }
    }
}

/// Y-axis bounds for bar and line charts: always includes zero, rounded
/// outwards to tick steps.
pub fn value_bounds(points: &[DataPoint]) -> (f64, f64) {
    let lo = points.iter().map(|p| p.value).fold(0.0, f64::min);
    let hi = points.iter().map(|p| p.value).fold(0.0, f64::max);
    nice_domain(lo, hi, 10)
}

// ---------------------------------------------------------------------------
// Pie layout
// ---------------------------------------------------------------------------

/// Angular extent of one point's slice, in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl PieSlice {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Slices in data order. Negative values count as zero; an all-zero dataset
/// yields only empty slices.
pub fn pie_slices(points: &[DataPoint]) -> Vec<PieSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    let mut angle = 0.0;
    points
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let sweep = if total > 0.0 {
                p.value.max(0.0) / total * TAU
            } else {
                0.0
            };
            let slice = PieSlice {
                index,
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| DataPoint {
                label: format!("P{i}"),
                value,
            })
            .collect()
    }

    #[test]
    fn slices_cover_full_turn() {
        let slices = pie_slices(&pts(&[10.0, 20.0, 30.0]));
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[2].end - TAU).abs() < 1e-9);
        assert!((slices[1].end - slices[1].start - TAU / 3.0).abs() < 1e-9);
        assert_eq!(slices[1].start, slices[0].end);
    }

    #[test]
    fn zero_and_negative_values_give_empty_slices() {
        let slices = pie_slices(&pts(&[0.0, -5.0]));
        assert!(slices.iter().all(PieSlice::is_empty));
        let slices = pie_slices(&pts(&[-5.0, 5.0]));
        assert!(slices[0].is_empty());
        assert!((slices[1].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn bounds_include_zero_and_round_up() {
        assert_eq!(value_bounds(&pts(&[10.0, 20.0, 15.0, 25.0, 18.0])), (0.0, 26.0));
        assert_eq!(value_bounds(&pts(&[-3.2, 18.0])), (-4.0, 18.0));
        assert_eq!(value_bounds(&[]), (0.0, 0.0));
    }
}
