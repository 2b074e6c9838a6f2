use std::collections::VecDeque;
use std::sync::Arc;

use eframe::egui::Color32;
use image::RgbaImage;

use super::catalog::ResourceKind;
use super::raster;

// ---------------------------------------------------------------------------
// Whiteboard items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<[f32; 2]>,
    pub color: Color32,
    pub width: f32,
}

/// A rendered widget pinned to the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub id: u64,
    pub kind: ResourceKind,
    pub image: Arc<RgbaImage>,
    /// Top-left corner in board coordinates.
    pub pos: [f32; 2],
}

impl Snapshot {
    pub fn size(&self) -> [f32; 2] {
        [self.image.width() as f32, self.image.height() as f32]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Stroke(Stroke),
    Snapshot(Snapshot),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color32,
    pub width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 3.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Whiteboard – drawing state with undo/redo
// ---------------------------------------------------------------------------

/// Undo steps kept; the oldest are dropped first.
pub const UNDO_LIMIT: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct Whiteboard {
    items: Vec<Item>,
    current: Option<Stroke>,
    undo: VecDeque<Vec<Item>>,
    redo: Vec<Vec<Item>>,
    next_id: u64,
    pub pen: Pen,
}

impl Whiteboard {
    pub fn with_pen(pen: Pen) -> Self {
        Self {
            pen,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The stroke still being drawn, if any.
    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    fn push_undo(&mut self, items: Vec<Item>) {
        if self.undo.len() == UNDO_LIMIT {
            self.undo.pop_front();
        }
        self.undo.push_back(items);
    }

    fn checkpoint(&mut self) {
        self.push_undo(self.items.clone());
        self.redo.clear();
    }

    /// Ids of the snapshots currently on the board.
    pub fn snapshot_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Snapshot(s) => Some(s.id),
            Item::Stroke(_) => None,
        })
    }

    pub fn begin_stroke(&mut self, p: [f32; 2]) {
        self.current = Some(Stroke {
            points: vec![p],
            color: self.pen.color,
            width: self.pen.width,
        });
    }

    pub fn extend_stroke(&mut self, p: [f32; 2]) {
        if let Some(stroke) = &mut self.current {
            if stroke.points.last() != Some(&p) {
                stroke.points.push(p);
            }
        }
    }

    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            self.checkpoint();
            self.items.push(Item::Stroke(stroke));
        }
    }

    /// Pin a rendered widget at `pos`; returns its id.
    pub fn insert_snapshot(&mut self, kind: ResourceKind, image: RgbaImage, pos: [f32; 2]) -> u64 {
        self.checkpoint();
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::Snapshot(Snapshot {
            id,
            kind,
            image: Arc::new(image),
            pos,
        }));
        log::info!("inserted {kind:?} snapshot #{id}");
        id
    }

    /// Remove everything. Undoable.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.checkpoint();
        self.items.clear();
    }

    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.undo.pop_back() else {
            return false;
        };
        self.redo.push(std::mem::replace(&mut self.items, prev));
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.items, next);
        self.push_undo(current);
        true
    }

    /// Flatten the board into an image of the given size on white.
    pub fn rasterize(&self, width: u32, height: u32) -> RgbaImage {
        let mut img = raster::blank(width, height, Color32::WHITE);
        for item in &self.items {
            match item {
                Item::Stroke(s) => raster::draw_polyline(&mut img, &s.points, s.width, s.color),
                Item::Snapshot(s) => {
                    raster::blit(&mut img, &s.image, s.pos[0] as i64, s.pos[1] as i64)
                }
            }
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(board: &mut Whiteboard, pts: &[[f32; 2]]) {
        board.begin_stroke(pts[0]);
        for &p in &pts[1..] {
            board.extend_stroke(p);
        }
        board.end_stroke();
    }

    #[test]
    fn strokes_are_committed_on_end() {
        let mut board = Whiteboard::default();
        board.begin_stroke([0.0, 0.0]);
        board.extend_stroke([1.0, 1.0]);
        board.extend_stroke([1.0, 1.0]);
        assert!(board.items().is_empty());
        assert_eq!(board.current().map(|s| s.points.len()), Some(2));
        board.end_stroke();
        assert_eq!(board.items().len(), 1);
        assert!(board.current().is_none());
    }

    #[test]
    fn undo_redo_restore_items() {
        let mut board = Whiteboard::default();
        draw(&mut board, &[[0.0, 0.0], [5.0, 5.0]]);
        draw(&mut board, &[[1.0, 0.0], [5.0, 9.0]]);
        let both = board.items().to_vec();

        assert!(board.undo());
        assert_eq!(board.items().len(), 1);
        assert!(board.redo());
        assert_eq!(board.items(), both.as_slice());
        assert!(!board.redo());
    }

    #[test]
    fn clear_is_undoable_and_new_work_drops_redo() {
        let mut board = Whiteboard::default();
        draw(&mut board, &[[0.0, 0.0]]);
        board.clear();
        assert!(board.items().is_empty());
        assert!(board.undo());
        assert_eq!(board.items().len(), 1);

        draw(&mut board, &[[3.0, 3.0]]);
        assert!(!board.can_redo());
    }

    #[test]
    fn undo_history_is_bounded() {
        let mut board = Whiteboard::default();
        for i in 0..500 {
            let pts: Vec<[f32; 2]> = (0..100).map(|j| [i as f32, j as f32]).collect();
            draw(&mut board, &pts);
        }
        assert_eq!(board.items().len(), 500);
        assert_eq!(board.undo_depth(), UNDO_LIMIT);

        let mut undone = 0;
        while board.undo() {
            undone += 1;
        }
        assert_eq!(undone, UNDO_LIMIT);
        assert_eq!(board.items().len(), 500 - UNDO_LIMIT);

        while board.redo() {}
        assert_eq!(board.items().len(), 500);
        assert_eq!(board.undo_depth(), UNDO_LIMIT);
    }

    #[test]
    fn snapshot_ids_track_undo_and_clear() {
        let mut board = Whiteboard::default();
        let img = raster::blank(2, 2, Color32::RED);
        let a = board.insert_snapshot(ResourceKind::Chart, img.clone(), [0.0, 0.0]);
        draw(&mut board, &[[1.0, 1.0]]);
        let b = board.insert_snapshot(ResourceKind::NumberLine, img, [4.0, 4.0]);
        assert_eq!(board.snapshot_ids().collect::<Vec<_>>(), vec![a, b]);

        board.undo();
        assert_eq!(board.snapshot_ids().collect::<Vec<_>>(), vec![a]);
        board.clear();
        assert_eq!(board.snapshot_ids().count(), 0);
    }

    #[test]
    fn snapshots_get_unique_ids_and_rasterize() {
        let mut board = Whiteboard::default();
        let img = raster::blank(2, 2, Color32::RED);
        let a = board.insert_snapshot(ResourceKind::Chart, img.clone(), [1.0, 1.0]);
        let b = board.insert_snapshot(ResourceKind::Chart, img, [5.0, 5.0]);
        assert_ne!(a, b);

        let out = board.rasterize(8, 8);
        assert_eq!(out.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(6, 6).0, [255, 0, 0, 255]);
    }

    #[test]
    fn pen_settings_apply_to_new_strokes() {
        let mut board = Whiteboard::with_pen(Pen {
            color: Color32::BLUE,
            width: 8.0,
        });
        draw(&mut board, &[[4.0, 4.0]]);
        match &board.items()[0] {
            Item::Stroke(s) => {
                assert_eq!(s.color, Color32::BLUE);
                assert_eq!(s.width, 8.0);
            }
            other => panic!("unexpected item {other:?}"),
        }
    }
}
