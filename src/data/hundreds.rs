use std::collections::BTreeSet;

use eframe::egui::Color32;

use crate::color::{MANUAL_SELECTION, TIMES_TABLE};

/// Numbers shown on the square run from 1 to this value inclusive.
pub const SQUARE_SIZE: u32 = 100;

/// Highest times table offered.
pub const TABLE_COUNT: u32 = 12;

// ---------------------------------------------------------------------------
// TableFilter – one times-table highlight rule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFilter {
    pub multiplier: u32,
    pub active: bool,
    pub color: Color32,
}

impl TableFilter {
    pub fn matches(&self, n: u32) -> bool {
        self.active && n % self.multiplier == 0
    }
}

// ---------------------------------------------------------------------------
// Colour resolution
// ---------------------------------------------------------------------------

/// Resolve the display colour of `n`.
///
/// Priority, highest first:
/// * `n` was clicked directly → [`MANUAL_SELECTION`]
/// * the largest active multiplier dividing `n` → that table's colour
/// * nothing → `None`
pub fn resolve_color(n: u32, filters: &[TableFilter], selected: &BTreeSet<u32>) -> Option<Color32> {
    if selected.contains(&n) {
        return Some(MANUAL_SELECTION);
    }
    filters
        .iter()
        .filter(|f| f.matches(n))
        .max_by_key(|f| f.multiplier)
        .map(|f| f.color)
}

// ---------------------------------------------------------------------------
// HundredsSquare – page state
// ---------------------------------------------------------------------------

/// Legend content: active tables and the sorted manual selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub tables: Vec<(u32, Color32)>,
    pub selected: Vec<u32>,
}

#[derive(Debug, Clone)]
pub struct HundredsSquare {
    filters: [TableFilter; TABLE_COUNT as usize],
    selected: BTreeSet<u32>,
}

impl Default for HundredsSquare {
    fn default() -> Self {
        let filters = std::array::from_fn(|i| TableFilter {
            multiplier: i as u32 + 1,
            active: false,
            color: TIMES_TABLE[i],
        });
        Self {
            filters,
            selected: BTreeSet::new(),
        }
    }
}

impl HundredsSquare {
    pub fn filters(&self) -> &[TableFilter] {
        &self.filters
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    pub fn is_table_active(&self, multiplier: u32) -> bool {
        self.filter(multiplier).is_some_and(|f| f.active)
    }

    fn filter(&self, multiplier: u32) -> Option<&TableFilter> {
        let idx = multiplier.checked_sub(1)? as usize;
        self.filters.get(idx)
    }

    /// Flip a times table on or off. Unknown multipliers are ignored.
    pub fn toggle_table(&mut self, multiplier: u32) {
        let Some(idx) = multiplier.checked_sub(1).map(|i| i as usize) else {
            return;
        };
        if let Some(filter) = self.filters.get_mut(idx) {
            filter.active = !filter.active;
            log::debug!("{}x table active = {}", multiplier, filter.active);
        }
    }

    /// Toggle a directly clicked number. Numbers off the square are ignored.
    pub fn toggle_number(&mut self, n: u32) {
        if !(1..=SQUARE_SIZE).contains(&n) {
            return;
        }
        if !self.selected.remove(&n) {
            self.selected.insert(n);
        }
    }

    /// Drop manual selections, keep tables.
    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Drop manual selections and switch every table off.
    pub fn clear_all(&mut self) {
        self.selected.clear();
        for f in &mut self.filters {
            f.active = false;
        }
    }

    pub fn color_for(&self, n: u32) -> Option<Color32> {
        resolve_color(n, &self.filters, &self.selected)
    }

    /// Colours of 1..=100 in row-major order, for snapshots.
    pub fn colors(&self) -> Vec<Option<Color32>> {
        (1..=SQUARE_SIZE).map(|n| self.color_for(n)).collect()
    }

    pub fn legend(&self) -> Legend {
        Legend {
            tables: self
                .filters
                .iter()
                .filter(|f| f.active)
                .map(|f| (f.multiplier, f.color))
                .collect(),
            selected: self.selected.iter().copied().collect(),
        }
    }
}
