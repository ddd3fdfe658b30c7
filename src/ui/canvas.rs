// Braille pixel canvas. Each terminal cell holds a 2x4 dot grid, giving
// sub-cell resolution for the paddles and the ghost.

/// Offset of each braille dot within the U+2800 block, indexed by
/// (column, row-within-cell). Dots 1-3 and 7 are the left column,
/// 4-6 and 8 the right.
const DOT_BITS: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

pub struct PixelCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![0; cols * rows],
        }
    }

    /// Set one pixel. Out-of-range coordinates are ignored, so callers
    /// can draw shapes that partially overhang the canvas.
    pub fn set(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let (cx, cy) = (x / 2, y / 4);
        if cx >= self.cols || cy >= self.rows {
            return;
        }
        self.cells[cy * self.cols + cx] |= DOT_BITS[x % 2][y % 4];
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for py in y..y + h {
            for px in x..x + w {
                self.set(px, py);
            }
        }
    }

    /// Ghost silhouette: a dome over a solid body, with a scalloped
    /// bottom edge. Cosmetic only - the simulation's collision box is
    /// half this size.
    pub fn fill_ghost(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let rx = w as f32 / 2.0;
        let ry = h as f32 / 2.0;
        for px in 0..w {
            // Dome: column starts where the half-ellipse allows.
            let dx = (px as f32 + 0.5 - rx) / rx;
            let top = ry * (1.0 - (1.0 - dx * dx).max(0.0).sqrt());
            // Scallop: three feet along the bottom edge.
            let foot_phase = (px * 6 / w) % 2;
            let bottom = h - foot_phase * (h / 8).max(1);
            for py in top as i32..bottom {
                self.set(x + px, y + py);
            }
        }
    }

    /// One terminal row of braille characters. Empty cells render as a
    /// plain space so the terminal background shows through.
    pub fn row_text(&self, row: usize) -> String {
        let mut line = String::with_capacity(self.cols);
        for col in 0..self.cols {
            match self.cells[row * self.cols + col] {
                0 => line.push(' '),
                pattern => line.push(char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')),
            }
        }
        line
    }
}
