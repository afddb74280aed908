/// CanvasSurface — software raster render target.
///
/// Pixels are stored as packed RGBA (one `u32` per pixel, byte order
/// r, g, b, a). The transform state is the affine pair `(a, b)` with
/// `screen = a * world + b`; `scale` multiplies `a`, `translate`
/// offsets `b` by `a * d`, which reproduces canvas-context
/// composition for the camera's scale-then-translate bracket.

use glam::Vec2;
use pond_2d_engine::surface::{Surface, Blend, Color};

/// Transform + blend state, saved and restored as one unit.
#[derive(Debug, Clone, Copy)]
struct DrawState {
    /// Per-axis scale of the current transform
    a: Vec2,
    /// Offset of the current transform
    b: Vec2,
    blend: Blend,
}

impl DrawState {
    fn identity() -> Self {
        Self {
            a: Vec2::ONE,
            b: Vec2::ZERO,
            blend: Blend::SourceOver,
        }
    }

    fn apply(&self, p: Vec2) -> Vec2 {
        self.a * p + self.b
    }
}

/// Offscreen software canvas implementing the engine's Surface trait.
pub struct CanvasSurface {
    width: u32,
    height: u32,
    dpr: f32,
    pixels: Vec<u32>,
    state: DrawState,
    stack: Vec<DrawState>,
}

fn pack(color: Color) -> u32 {
    u32::from_le_bytes([color.r, color.g, color.b, color.a])
}

fn unpack(pixel: u32) -> Color {
    let [r, g, b, a] = pixel.to_le_bytes();
    Color::rgba(r, g, b, a)
}

/// Composite `src` over/onto `dst` according to `blend`.
fn blend_pixel(dst: u32, src: Color, blend: Blend) -> u32 {
    let d = unpack(dst);
    let sa = src.a as u32;

    let out = match blend {
        Blend::SourceOver => {
            let inv = 255 - sa;
            Color::rgba(
                ((src.r as u32 * sa + d.r as u32 * inv) / 255) as u8,
                ((src.g as u32 * sa + d.g as u32 * inv) / 255) as u8,
                ((src.b as u32 * sa + d.b as u32 * inv) / 255) as u8,
                (sa + d.a as u32 * inv / 255).min(255) as u8,
            )
        }
        Blend::Lighter => Color::rgba(
            (d.r as u32 + src.r as u32 * sa / 255).min(255) as u8,
            (d.g as u32 + src.g as u32 * sa / 255).min(255) as u8,
            (d.b as u32 + src.b as u32 * sa / 255).min(255) as u8,
            (d.a as u32 + sa).min(255) as u8,
        ),
    };

    pack(out)
}

impl CanvasSurface {
    /// Create a canvas of the given size, cleared to transparent.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dpr: 1.0,
            pixels: vec![0; (width * height) as usize],
            state: DrawState::identity(),
            stack: Vec::new(),
        }
    }

    /// Set the device pixel ratio reported to the engine.
    pub fn with_device_pixel_ratio(mut self, dpr: f32) -> Self {
        self.dpr = dpr;
        self
    }

    /// Pixel at (`x`, `y`); transparent black outside the canvas.
    pub fn pixel_at(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::TRANSPARENT;
        }
        unpack(self.pixels[(y * self.width + x) as usize])
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Blend one pixel, ignoring coordinates outside the canvas.
    fn plot(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        self.pixels[index] = blend_pixel(self.pixels[index], color, self.state.blend);
    }

    /// Screen-space bounding box [x0, x1) x [y0, y1) of two corners,
    /// clamped to the canvas.
    fn clamped_span(&self, p0: Vec2, p1: Vec2) -> (i64, i64, i64, i64) {
        let x0 = p0.x.min(p1.x).round() as i64;
        let x1 = p0.x.max(p1.x).round() as i64;
        let y0 = p0.y.min(p1.y).round() as i64;
        let y1 = p0.y.max(p1.y).round() as i64;
        (
            x0.max(0),
            x1.min(self.width as i64),
            y0.max(0),
            y1.min(self.height as i64),
        )
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height) as usize];
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn clear(&mut self, color: Color) {
        let pixel = pack(color);
        self.pixels.fill(pixel);
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.a *= Vec2::new(sx, sy);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.b += self.state.a * Vec2::new(dx, dy);
    }

    fn set_blend(&mut self, blend: Blend) {
        self.state.blend = blend;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let p0 = self.state.apply(Vec2::new(x, y));
        let p1 = self.state.apply(Vec2::new(x + w, y + h));
        let (x0, x1, y0, y1) = self.clamped_span(p0, p1);

        for py in y0..y1 {
            for px in x0..x1 {
                self.plot(px, py, color);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color) {
        let center = self.state.apply(Vec2::new(x, y));
        let rx = (r * self.state.a.x).abs().max(f32::EPSILON);
        let ry = (r * self.state.a.y).abs().max(f32::EPSILON);

        let p0 = center - Vec2::new(rx, ry);
        let p1 = center + Vec2::new(rx, ry);
        let (x0, x1, y0, y1) = self.clamped_span(p0, p1);

        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f32 + 0.5 - center.x) / rx;
                let dy = (py as f32 + 0.5 - center.y) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.plot(px, py, color);
                }
            }
        }
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
        let p0 = self.state.apply(Vec2::new(x, y));
        let p1 = self.state.apply(Vec2::new(x + w, y + h));
        let rx = (r * self.state.a.x).abs();
        let ry = (r * self.state.a.y).abs();

        let min = p0.min(p1);
        let max = p0.max(p1);
        let (x0, x1, y0, y1) = self.clamped_span(p0, p1);

        // inner region whose corners anchor the rounding ellipses;
        // oversized radii collapse it to the rect center
        let cx0 = min.x + rx;
        let cx1 = (max.x - rx).max(cx0);
        let cy0 = min.y + ry;
        let cy1 = (max.y - ry).max(cy0);

        for py in y0..y1 {
            for px in x0..x1 {
                let u = px as f32 + 0.5;
                let v = py as f32 + 0.5;

                let nearest_x = u.clamp(cx0, cx1);
                let nearest_y = v.clamp(cy0, cy1);
                let dx = u - nearest_x;
                let dy = v - nearest_y;

                let inside = if rx > 0.0 && ry > 0.0 {
                    let ex = dx / rx;
                    let ey = dy / ry;
                    ex * ex + ey * ey <= 1.0
                } else {
                    dx == 0.0 && dy == 0.0
                };

                if inside {
                    self.plot(px, py, color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "canvas_surface_tests.rs"]
mod tests;
