use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// DataPoint – one labelled value of the chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    /// Validate raw form input into a point. The label is stored trimmed.
    pub fn parse(label: &str, raw_value: &str) -> Result<Self, EditError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(EditError::EmptyLabel);
        }
        let value = raw_value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| EditError::InvalidValue(raw_value.to_string()))?;
        Ok(Self {
            label: label.to_string(),
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("'{0}' is not a number")]
    InvalidValue(String),
    #[error("row {index} does not exist ({len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no row is being edited")]
    NoActiveEdit,
}

// ---------------------------------------------------------------------------
// DataTable – ordered points plus at most one in-progress edit
// ---------------------------------------------------------------------------

/// Text buffers of the row currently being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub index: usize,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    points: Vec<DataPoint>,
    edit: Option<EditSession>,
}

impl Default for DataTable {
    fn default() -> Self {
        let points = [("A", 10.0), ("B", 20.0), ("C", 15.0), ("D", 25.0), ("E", 18.0)]
            .into_iter()
            .map(|(label, value)| DataPoint {
                label: label.to_string(),
                value,
            })
            .collect();
        Self::from_points(points)
    }
}

impl DataTable {
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points, edit: None }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Mutable access to the edit buffers, for text inputs.
    pub fn editing_mut(&mut self) -> Option<&mut EditSession> {
        self.edit.as_mut()
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    /// Append a point. Nothing changes if the input is invalid.
    pub fn add(&mut self, label: &str, raw_value: &str) -> Result<(), EditError> {
        let point = DataPoint::parse(label, raw_value)?;
        self.points.push(point);
        Ok(())
    }

    /// Delete the row at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<DataPoint, EditError> {
        self.check_index(index)?;
        let removed = self.points.remove(index);
        self.edit = self.edit.take().and_then(|mut session| {
            if session.index == index {
                return None;
            }
            if session.index > index {
                session.index -= 1;
            }
            Some(session)
        });
        Ok(removed)
    }

    /// Open row `index` for editing, discarding any other uncommitted edit.
    pub fn begin_edit(&mut self, index: usize) -> Result<&mut EditSession, EditError> {
        self.check_index(index)?;
        let point = &self.points[index];
        Ok(self.edit.insert(EditSession {
            index,
            label: point.label.clone(),
            value: point.value.to_string(),
        }))
    }

    /// Replace the edited row. On invalid input the edit stays open.
    pub fn commit_edit(&mut self, label: &str, raw_value: &str) -> Result<(), EditError> {
        let index = self.edit.as_ref().ok_or(EditError::NoActiveEdit)?.index;
        let point = DataPoint::parse(label, raw_value)?;
        self.points[index] = point;
        self.edit = None;
        Ok(())
    }

    /// Commit whatever is in the edit buffers.
    pub fn commit_buffers(&mut self) -> Result<(), EditError> {
        let session = self.edit.clone().ok_or(EditError::NoActiveEdit)?;
        self.commit_edit(&session.label, &session.value)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Replace every point, e.g. after an import. Cancels any edit.
    pub fn replace(&mut self, points: Vec<DataPoint>) {
        self.points = points;
        self.edit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(t: &DataTable) -> Vec<&str> {
        t.points().iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn add_then_remove_last_restores_table() {
        let mut t = DataTable::default();
        let before = t.clone();
        t.add("F", "3.5").unwrap();
        assert_eq!(t.len(), 6);
        let removed = t.remove(t.len() - 1).unwrap();
        assert_eq!(removed, DataPoint { label: "F".into(), value: 3.5 });
        assert_eq!(t, before);
    }

    #[test]
    fn invalid_add_leaves_table_unchanged() {
        let mut t = DataTable::default();
        let before = t.clone();
        assert_eq!(t.add("", "5"), Err(EditError::EmptyLabel));
        assert_eq!(t.add("   ", "5"), Err(EditError::EmptyLabel));
        assert_eq!(t.add("x", "abc"), Err(EditError::InvalidValue("abc".into())));
        assert!(t.add("x", "").is_err());
        assert!(t.add("x", "inf").is_err());
        assert!(t.add("x", "NaN").is_err());
        assert_eq!(t, before);
    }

    #[test]
    fn add_trims_label_and_value() {
        let mut t = DataTable::from_points(Vec::new());
        assert!(t.is_empty());
        t.add("  Apples ", " -2.25 ").unwrap();
        assert!(!t.is_empty());
        assert_eq!(t.points()[0], DataPoint { label: "Apples".into(), value: -2.25 });
    }

    #[test]
    fn remove_keeps_order_and_rejects_bad_index() {
        let mut t = DataTable::default();
        t.remove(1).unwrap();
        assert_eq!(labels(&t), vec!["A", "C", "D", "E"]);
        assert_eq!(t.remove(4), Err(EditError::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(labels(&t), vec!["A", "C", "D", "E"]);
    }

    #[test]
    fn edit_round_trip() {
        let mut t = DataTable::default();
        let session = t.begin_edit(2).unwrap();
        assert_eq!(session.label, "C");
        assert_eq!(session.value, "15");
        t.commit_edit("Cats", "16.5").unwrap();
        assert!(t.editing().is_none());
        assert_eq!(t.points()[2], DataPoint { label: "Cats".into(), value: 16.5 });
    }

    #[test]
    fn failed_commit_keeps_edit_open_and_data_intact() {
        let mut t = DataTable::default();
        t.begin_edit(0).unwrap();
        assert_eq!(t.commit_edit("A", "ten"), Err(EditError::InvalidValue("ten".into())));
        assert_eq!(t.editing().map(|s| s.index), Some(0));
        assert_eq!(t.points()[0].value, 10.0);
    }

    #[test]
    fn begin_edit_discards_previous_buffers() {
        let mut t = DataTable::default();
        t.begin_edit(0).unwrap().label = "changed".into();
        t.begin_edit(1).unwrap();
        assert_eq!(t.editing().map(|s| s.index), Some(1));
        t.cancel_edit();
        assert_eq!(labels(&t), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn commit_buffers_uses_edited_text() {
        let mut t = DataTable::default();
        let session = t.begin_edit(4).unwrap();
        session.value = "19".into();
        t.commit_buffers().unwrap();
        assert_eq!(t.points()[4].value, 19.0);
    }

    #[test]
    fn commit_without_edit_fails() {
        let mut t = DataTable::default();
        assert_eq!(t.commit_edit("A", "1"), Err(EditError::NoActiveEdit));
        assert_eq!(t.begin_edit(9).err(), Some(EditError::IndexOutOfRange { index: 9, len: 5 }));
    }

    #[test]
    fn remove_adjusts_active_edit() {
        let mut t = DataTable::default();
        t.begin_edit(3).unwrap();
        t.remove(0).unwrap();
        assert_eq!(t.editing().map(|s| s.index), Some(2));
        t.commit_edit("Dee", "1").unwrap();
        assert_eq!(labels(&t), vec!["B", "C", "Dee", "E"]);

        t.begin_edit(1).unwrap();
        t.remove(1).unwrap();
        assert!(t.editing().is_none());
    }
}
