use eframe::egui::Color32;
use image::{Rgba, RgbaImage};

use super::chart::value_bounds;
use super::hundreds::HundredsSquare;
use super::number_line::NumberLine;
use super::points::DataPoint;
use super::scale::LinearScale;
use crate::color::{self, to_rgba};

// ---------------------------------------------------------------------------
// Primitive drawing on an RGBA image
// ---------------------------------------------------------------------------

pub fn blank(width: u32, height: u32, background: Color32) -> RgbaImage {
    RgbaImage::from_pixel(width.max(1), height.max(1), Rgba(to_rgba(background)))
}

/// Fill `[x0, x1) × [y0, y1)`, clipped to the image.
pub fn fill_rect(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, c: Color32) {
    let (w, h) = img.dimensions();
    let xs = x0.max(0.0).round() as u32..(x1.round().max(0.0) as u32).min(w);
    let ys = y0.max(0.0).round() as u32..(y1.round().max(0.0) as u32).min(h);
    let px = Rgba(to_rgba(c));
    for y in ys {
        for x in xs.clone() {
            img.put_pixel(x, y, px);
        }
    }
}

pub fn fill_disc(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, c: Color32) {
    let (w, h) = img.dimensions();
    let r = r.max(0.5);
    let px = Rgba(to_rgba(c));
    let x_lo = (cx - r).floor().max(0.0) as u32;
    let y_lo = (cy - r).floor().max(0.0) as u32;
    let x_hi = ((cx + r).ceil().max(0.0) as u32).min(w);
    let y_hi = ((cy + r).ceil().max(0.0) as u32).min(h);
    for y in y_lo..y_hi {
        for x in x_lo..x_hi {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, px);
            }
        }
    }
}

/// Thick line drawn by stamping discs of `width / 2` along the segment.
pub fn draw_line(img: &mut RgbaImage, a: [f32; 2], b: [f32; 2], width: f32, c: Color32) {
    let r = width / 2.0;
    let len = ((b[0] - a[0]).powi(2) + (b[1] - a[1]).powi(2)).sqrt();
    let steps = (len / r.max(0.5)).ceil().max(1.0) as usize * 2;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        fill_disc(img, a[0] + (b[0] - a[0]) * t, a[1] + (b[1] - a[1]) * t, r, c);
    }
}

pub fn draw_polyline(img: &mut RgbaImage, points: &[[f32; 2]], width: f32, c: Color32) {
    match points {
        [] => {}
        [p] => fill_disc(img, p[0], p[1], width / 2.0, c),
        _ => {
            for pair in points.windows(2) {
                draw_line(img, pair[0], pair[1], width, c);
            }
        }
    }
}

/// Copy `src` onto `dst` with its top-left corner at `(x, y)`.
pub fn blit(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = dst.dimensions();
    for (sx, sy, px) in src.enumerate_pixels() {
        let tx = x + sx as i64;
        let ty = y + sy as i64;
        if tx >= 0 && ty >= 0 && (tx as u32) < dw && (ty as u32) < dh {
            dst.put_pixel(tx as u32, ty as u32, *px);
        }
    }
}

// ---------------------------------------------------------------------------
// Widget snapshots for the whiteboard
// ---------------------------------------------------------------------------

const SNAPSHOT_BG: Color32 = Color32::WHITE;
const EMPTY_CELL: Color32 = Color32::from_rgb(229, 231, 235);
const INK: Color32 = Color32::from_rgb(31, 41, 55);

/// 10×10 grid of the square's resolved colours, `cell` pixels per number.
pub fn hundreds_square(square: &HundredsSquare, cell: u32) -> RgbaImage {
    let gap = 2;
    let side = 10 * cell + 11 * gap;
    let mut img = blank(side, side, SNAPSHOT_BG);
    for (i, c) in square.colors().into_iter().enumerate() {
        let (row, col) = (i as u32 / 10, i as u32 % 10);
        let x = (gap + col * (cell + gap)) as f32;
        let y = (gap + row * (cell + gap)) as f32;
        fill_rect(
            &mut img,
            x,
            y,
            x + cell as f32,
            y + cell as f32,
            c.unwrap_or(EMPTY_CELL),
        );
    }
    img
}

/// Axis, ticks, highlights and selections of a number line.
pub fn number_line(line: &NumberLine, width: u32, height: u32) -> RgbaImage {
    let mut img = blank(width, height, SNAPSHOT_BG);
    let margin = 16.0;
    let inner = (width as f32 - 2.0 * margin).max(1.0);
    let axis_y = height as f32 / 2.0;
    let render = line.render(inner as f64);
    if render.is_empty() {
        return img;
    }
    draw_line(&mut img, [margin, axis_y], [margin + inner, axis_y], 2.0, INK);
    for t in &render.ticks {
        let x = margin + t.x as f32;
        draw_line(&mut img, [x, axis_y - 6.0], [x, axis_y + 6.0], 1.0, INK);
    }
    let parity = match render.mode {
        super::number_line::HighlightMode::Odd => color::ODD_HIGHLIGHT,
        _ => color::EVEN_HIGHLIGHT,
    };
    for m in &render.parity_marks {
        fill_disc(&mut img, margin + m.x as f32, axis_y, 4.0, parity);
    }
    for m in &render.on_axis {
        fill_disc(&mut img, margin + m.x as f32, axis_y, 5.0, color::SELECTED_MARKER);
    }
    for m in &render.off_axis {
        let x = margin + m.x as f32;
        draw_line(&mut img, [x, axis_y], [x, axis_y + 12.0], 1.0, color::SELECTED_MARKER);
        fill_disc(&mut img, x, axis_y + 14.0, 2.5, color::SELECTED_MARKER);
    }
    img
}

/// Plain bar chart of the points.
pub fn bar_chart(points: &[DataPoint], width: u32, height: u32) -> RgbaImage {
    let mut img = blank(width, height, SNAPSHOT_BG);
    if points.is_empty() {
        return img;
    }
    let margin = 10.0;
    let inner_w = width as f32 - 2.0 * margin;
    let (lo, hi) = value_bounds(points);
    let y = LinearScale::new((lo, hi), ((height as f32 - margin) as f64, margin as f64));
    let zero = y.map(0.0) as f32;
    let band = inner_w / points.len() as f32;
    let pad = band * 0.1;
    for (i, p) in points.iter().enumerate() {
        let x0 = margin + i as f32 * band + pad / 2.0;
        let top = y.map(p.value) as f32;
        fill_rect(&mut img, x0, top.min(zero), x0 + band - pad, top.max(zero), color::SERIES);
    }
    draw_line(&mut img, [margin, zero], [margin + inner_w, zero], 1.0, INK);
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(img: &RgbaImage, x: u32, y: u32) -> Color32 {
        let p = img.get_pixel(x, y).0;
        Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3])
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut img = blank(4, 4, Color32::WHITE);
        fill_rect(&mut img, -2.0, -2.0, 2.0, 10.0, Color32::RED);
        assert_eq!(px(&img, 1, 3), Color32::RED);
        assert_eq!(px(&img, 2, 0), Color32::WHITE);
    }

    #[test]
    fn line_covers_both_ends() {
        let mut img = blank(20, 20, Color32::WHITE);
        draw_line(&mut img, [2.0, 10.0], [17.0, 10.0], 3.0, Color32::BLACK);
        assert_eq!(px(&img, 2, 10), Color32::BLACK);
        assert_eq!(px(&img, 16, 10), Color32::BLACK);
        assert_eq!(px(&img, 10, 2), Color32::WHITE);
    }

    #[test]
    fn blit_clips_at_edges() {
        let mut dst = blank(4, 4, Color32::WHITE);
        let src = blank(3, 3, Color32::BLUE);
        blit(&mut dst, &src, 2, -1);
        assert_eq!(px(&dst, 3, 1), Color32::BLUE);
        assert_eq!(px(&dst, 3, 2), Color32::WHITE);
        assert_eq!(px(&dst, 1, 0), Color32::WHITE);
    }

    #[test]
    fn hundreds_snapshot_uses_resolved_colours() {
        let mut sq = HundredsSquare::default();
        sq.toggle_number(1);
        let img = hundreds_square(&sq, 8);
        // Number 1 is the top-left cell, number 2 is next to it.
        assert_eq!(px(&img, 4, 4), color::MANUAL_SELECTION);
        assert_eq!(px(&img, 2 + 8 + 2 + 3, 4), EMPTY_CELL);
    }

    #[test]
    fn degenerate_number_line_snapshot_is_blank() {
        let img = number_line(&NumberLine::new(5, 1, 1), 100, 40);
        assert!(img.pixels().all(|p| p.0 == to_rgba(SNAPSHOT_BG)));
    }

    #[test]
    fn bar_chart_draws_bars() {
        let pts = vec![DataPoint { label: "A".into(), value: 10.0 }];
        let img = bar_chart(&pts, 100, 100);
        assert_eq!(px(&img, 50, 80), color::SERIES);
        assert_eq!(px(&img, 50, 5), SNAPSHOT_BG);
    }
}
