use glam::{Vec2, Vec3};

/// RGBA8 colour buffer with a matching depth buffer
///
/// Screen coordinates have the origin at the top-left; depth grows away
/// from the viewer, so smaller values win.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Vec<[u8; 4]>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let count = (width * height) as usize;
        Self {
            pixels: vec![[0, 0, 0, 255]; count],
            depth: vec![f32::INFINITY; count],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Fill with `color` and reset depth
    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels.fill(color);
        self.depth.fill(f32::INFINITY);
    }

    /// Write a pixel if it is nearer than what is already there
    pub fn plot(&mut self, x: i32, y: i32, depth: f32, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if depth < self.depth[idx] {
            self.depth[idx] = depth;
            self.pixels[idx] = color;
        }
    }

    /// Draw line using Bresenham's algorithm, interpolating depth
    pub fn draw_line(&mut self, from: Vec3, to: Vec3, color: [u8; 4]) {
        let (mut x, mut y) = (from.x.round() as i32, from.y.round() as i32);
        let (x2, y2) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        let steps = dx.max(-dy).max(1) as f32;
        let mut step = 0.0;

        loop {
            let depth = from.z + (to.z - from.z) * (step / steps);
            self.plot(x, y, depth, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step += 1.0;
        }
    }

    /// Fill a triangle given in screen space (x, y, depth), either winding
    pub fn fill_triangle(&mut self, vertices: [Vec3; 3], color: [u8; 4]) {
        let [a, b, c] = vertices;
        let area = edge(a.truncate(), b.truncate(), c.truncate());
        if area.abs() < f32::EPSILON {
            return;
        }

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as i32;
        let max_x = a.x.max(b.x).max(c.x).ceil().min(self.width as f32 - 1.0) as i32;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as i32;
        let max_y = a.y.max(b.y).max(c.y).ceil().min(self.height as f32 - 1.0) as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b.truncate(), c.truncate(), p) / area;
                let w1 = edge(c.truncate(), a.truncate(), p) / area;
                let w2 = edge(a.truncate(), b.truncate(), p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * a.z + w1 * b.z + w2 * c.z;
                self.plot(x, y, depth, color);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[(y * self.width + x) as usize])
    }

    /// Pixel buffer as tightly packed RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp_dot(p - a)
}
