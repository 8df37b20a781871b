use ndarray::{Array3, ArrayView3, aview1, s};

pub type Rgb = [u8; 3];

/// RGB pixel buffer of shape `(height, width, 3)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Array3<u8>,
}

impl Frame {
    pub fn filled(height: usize, width: usize, color: Rgb) -> Self {
        Self {
            pixels: Array3::from_shape_fn((height, width, 3), |(_, _, c)| color[c]),
        }
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.pixels.dim()
    }

    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    /// Row-major bytes, channel last.
    pub fn to_vec(&self) -> Vec<u8> {
        self.pixels.iter().copied().collect()
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<Rgb> {
        let (height, width, _) = self.shape();
        if row >= height || col >= width {
            return None;
        }
        let p = self.pixels.slice(s![row, col, ..]);
        Some([p[0], p[1], p[2]])
    }

    /// Fills the axis-aligned rectangle at `(left, top)`; parts off the canvas are clipped.
    pub fn fill_rect(&mut self, left: f64, top: f64, width: f64, height: f64, color: Rgb) {
        let (rows, cols, _) = self.shape();
        let (x0, x1) = clip_span(left, left + width, cols);
        let (y0, y1) = clip_span(top, top + height, rows);
        self.pixels
            .slice_mut(s![y0..y1, x0..x1, ..])
            .assign(&aview1(&color));
    }

    /// Fills every pixel whose centre lies within `radius` of `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb) {
        let (rows, cols, _) = self.shape();
        let (x0, x1) = clip_span(cx - radius, cx + radius + 1.0, cols);
        let (y0, y1) = clip_span(cy - radius, cy + radius + 1.0, rows);
        let color = aview1(&color);
        for row in y0..y1 {
            for col in x0..x1 {
                let dx = col as f64 + 0.5 - cx;
                let dy = row as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.pixels.slice_mut(s![row, col, ..]).assign(&color);
                }
            }
        }
    }
}

fn clip_span(start: f64, end: f64, limit: usize) -> (usize, usize) {
    let lo = (start.max(0.0).floor() as usize).min(limit);
    let hi = (end.max(0.0).floor() as usize).min(limit);
    (lo, hi.max(lo))
}
