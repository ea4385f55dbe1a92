//! Character-grid plotter
//!
//! Draws a [`PlaneProjection`] into a fixed-size character frame: edges
//! as dotted lines, vertices as markers. The frame is auto-fitted to the
//! bounding box of everything it has to show, so the plot survives any
//! shift or scale the viewer applies.

use wire3d_core::PlaneProjection;

use crate::config::RenderConfig;

const LINE_CHAR: char = '.';

/// Render one plane view into a text frame
///
/// Returns a header line, `config.height` rows of plot, and a footer
/// with the plotted coordinate ranges.
pub fn render_view(view: &PlaneProjection, config: &RenderConfig) -> String {
    let (hl, vl) = view.plane.axis_labels();

    let mut coords: Vec<[f32; 2]> = view.points.clone();
    for seg in &view.segments {
        coords.push(seg.start);
        coords.push(seg.end);
    }

    if coords.is_empty() {
        return format!("[{}] (nothing to draw)\n", view.plane);
    }

    let bounds = Bounds::of(&coords);
    let mut frame = Frame::new(config.width, config.height);

    for seg in &view.segments {
        let start = frame.cell(seg.start, &bounds);
        let end = frame.cell(seg.end, &bounds);
        frame.line(start, end, LINE_CHAR);
    }

    if config.show_vertices {
        for p in &view.points {
            let cell = frame.cell(*p, &bounds);
            frame.plot(cell, config.marker);
        }
    }

    let mut out = format!("[{}] {} across, {} up\n", view.plane, hl, vl);
    out.push_str(&frame.to_string());
    out.push_str(&format!(
        "{}: {:.2}..{:.2}  {}: {:.2}..{:.2}\n",
        hl, bounds.min_x, bounds.max_x, vl, bounds.min_y, bounds.max_y
    ));
    out
}

/// Bounding box of the plotted coordinates
struct Bounds {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Bounds {
    fn of(coords: &[[f32; 2]]) -> Self {
        let mut bounds = Bounds {
            min_x: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            min_y: f32::INFINITY,
            max_y: f32::NEG_INFINITY,
        };
        for &[x, y] in coords {
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        bounds
    }

    /// Horizontal span, padded to avoid division by zero on flat views
    fn span_x(&self) -> f32 {
        let span = self.max_x - self.min_x;
        if span > f32::EPSILON { span } else { 1.0 }
    }

    fn span_y(&self) -> f32 {
        let span = self.max_y - self.min_y;
        if span > f32::EPSILON { span } else { 1.0 }
    }
}

/// A width x height character buffer with row 0 at the top
struct Frame {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Frame {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Map plot coordinates to a (col, row) cell, y pointing up
    fn cell(&self, [x, y]: [f32; 2], bounds: &Bounds) -> (usize, usize) {
        let fx = (x - bounds.min_x) / bounds.span_x();
        let fy = (y - bounds.min_y) / bounds.span_y();
        let col = ((fx * (self.width - 1) as f32).round() as usize).min(self.width - 1);
        let up = ((fy * (self.height - 1) as f32).round() as usize).min(self.height - 1);
        (col, self.height - 1 - up)
    }

    fn plot(&mut self, (col, row): (usize, usize), ch: char) {
        self.cells[row * self.width + col] = ch;
    }

    /// Draw a line between two cells by stepping the longer axis
    fn line(&mut self, (c0, r0): (usize, usize), (c1, r1): (usize, usize), ch: char) {
        let dc = c1 as i64 - c0 as i64;
        let dr = r1 as i64 - r0 as i64;
        let steps = dc.abs().max(dr.abs());

        if steps == 0 {
            self.plot((c0, r0), ch);
            return;
        }

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = (c0 as f32 + t * dc as f32).round() as usize;
            let row = (r0 as f32 + t * dr as f32).round() as usize;
            self.plot((col.min(self.width - 1), row.min(self.height - 1)), ch);
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            let line: String = self.cells[row * self.width..(row + 1) * self.width]
                .iter()
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
