use std::collections::BTreeSet;

use super::scale::LinearScale;

/// Largest magnitude for `min`, `max` and `interval`. Rendering walks every
/// integer in range, so the range has to stay small.
pub const VALUE_LIMIT: i64 = 10_000;

fn clamp_value(v: i64) -> i64 {
    v.clamp(-VALUE_LIMIT, VALUE_LIMIT)
}

// ---------------------------------------------------------------------------
// HighlightMode – even/odd highlighting is one tri-state, never both
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMode {
    #[default]
    Off,
    Even,
    Odd,
}

impl HighlightMode {
    fn marks(self, v: i64) -> bool {
        match self {
            HighlightMode::Off => false,
            HighlightMode::Even => v.rem_euclid(2) == 0,
            HighlightMode::Odd => v.rem_euclid(2) == 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Render description
// ---------------------------------------------------------------------------

/// A value and its horizontal position along the axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    pub value: i64,
    pub x: f64,
}

/// A selected value between ticks, drawn below the axis with its number.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledMark {
    pub value: i64,
    pub x: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberLineRender {
    pub ticks: Vec<Mark>,
    /// Even or odd highlights, depending on `mode`.
    pub parity_marks: Vec<Mark>,
    pub mode: HighlightMode,
    pub on_axis: Vec<Mark>,
    pub off_axis: Vec<LabelledMark>,
}

impl NumberLineRender {
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// NumberLine – page state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct NumberLine {
    min: i64,
    max: i64,
    interval: i64,
    selected: BTreeSet<i64>,
    mode: HighlightMode,
}

impl Default for NumberLine {
    fn default() -> Self {
        Self::new(0, 100, 10)
    }
}

impl NumberLine {
    /// Build a line over `[min, max]`. Bounds are clamped to
    /// `±VALUE_LIMIT` and the interval to `1..=VALUE_LIMIT`.
    pub fn new(min: i64, max: i64, interval: i64) -> Self {
        Self {
            min: clamp_value(min),
            max: clamp_value(max),
            interval: interval.clamp(1, VALUE_LIMIT),
            selected: BTreeSet::new(),
            mode: HighlightMode::Off,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn mode(&self) -> HighlightMode {
        self.mode
    }

    pub fn selected(&self) -> &BTreeSet<i64> {
        &self.selected
    }

    /// `max < min` leaves nothing to draw or click.
    pub fn is_degenerate(&self) -> bool {
        self.max < self.min
    }

    pub fn contains(&self, v: i64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    /// Change the displayed range; selections that fall outside it are dropped.
    pub fn set_range(&mut self, min: i64, max: i64) {
        self.min = clamp_value(min);
        self.max = clamp_value(max);
        if (self.min, self.max) != (min, max) {
            log::warn!("number line range {min}..={max} clamped to ±{VALUE_LIMIT}");
        }
        let (lo, hi) = (self.min, self.max);
        self.selected.retain(|v| (lo..=hi).contains(v));
    }

    pub fn set_interval(&mut self, interval: i64) {
        if !(1..=VALUE_LIMIT).contains(&interval) {
            log::warn!("number line interval {interval} clamped to 1..={VALUE_LIMIT}");
        }
        self.interval = interval.clamp(1, VALUE_LIMIT);
    }

    /// Toggle an explicit selection. Values outside the range are ignored.
    pub fn toggle_value(&mut self, v: i64) -> bool {
        if !self.contains(v) {
            return false;
        }
        if !self.selected.remove(&v) {
            self.selected.insert(v);
        }
        true
    }

    /// Scale from the line's domain onto `[0, width]`.
    pub fn scale(&self, width: f64) -> LinearScale {
        LinearScale::new((self.min as f64, self.max as f64), (0.0, width))
    }

    /// Value nearest to the clicked position, if it lies on the line.
    pub fn value_at(&self, x: f64, width: f64) -> Option<i64> {
        if self.is_degenerate() || !x.is_finite() {
            return None;
        }
        let v = self.scale(width).invert(x).round();
        if !v.is_finite() {
            return None;
        }
        let v = v as i64;
        self.contains(v).then_some(v)
    }

    /// Handle a click at pixel `x` along a line drawn `width` pixels wide.
    pub fn click(&mut self, x: f64, width: f64) -> Option<i64> {
        let v = self.value_at(x, width)?;
        self.toggle_value(v);
        Some(v)
    }

    pub fn toggle_even(&mut self) {
        self.mode = match self.mode {
            HighlightMode::Even => HighlightMode::Off,
            _ => HighlightMode::Even,
        };
    }

    pub fn toggle_odd(&mut self) {
        self.mode = match self.mode {
            HighlightMode::Odd => HighlightMode::Off,
            _ => HighlightMode::Odd,
        };
    }

    /// Clear selections and highlighting, keep the range.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.mode = HighlightMode::Off;
    }

    /// Everything needed to draw the line at `width` pixels.
    pub fn render(&self, width: f64) -> NumberLineRender {
        if self.is_degenerate() {
            return NumberLineRender::default();
        }
        let scale = self.scale(width);
        let mark = |value: i64| Mark {
            value,
            x: scale.map(value as f64),
        };

        let ticks = (self.min..=self.max)
            .step_by(self.interval as usize)
            .map(mark)
            .collect();

        let parity_marks = match self.mode {
            HighlightMode::Off => Vec::new(),
            mode => (self.min..=self.max)
                .filter(|&v| mode.marks(v))
                .map(mark)
                .collect(),
        };

        let mut on_axis = Vec::new();
        let mut off_axis = Vec::new();
        for &v in self.selected.iter().filter(|&&v| self.contains(v)) {
            if v % self.interval == 0 {
                on_axis.push(mark(v));
            } else {
                off_axis.push(LabelledMark {
                    value: v,
                    x: scale.map(v as f64),
                    label: v.to_string(),
                });
            }
        }

        NumberLineRender {
            ticks,
            parity_marks,
            mode: self.mode,
            on_axis,
            off_axis,
        }
    }
}
