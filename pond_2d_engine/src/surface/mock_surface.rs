/// Mock Surface for unit tests (no pixels required)
///
/// Records every call into a shared log so tests can assert on
/// bracket ordering (save before scale/translate, restore after
/// draws) and on the primitives the loop emits. The log handle stays
/// readable after the surface is boxed into a Game.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use super::color::Color;
#[cfg(test)]
use super::surface::{Surface, Blend};

/// One recorded Surface call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Clear(Color),
    Save,
    Restore,
    Scale(f32, f32),
    Translate(f32, f32),
    SetBlend(Blend),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    FillCircle { x: f32, y: f32, r: f32 },
    FillRoundRect { x: f32, y: f32, w: f32, h: f32, r: f32 },
    SetSize(u32, u32),
}

/// Cloneable handle onto a MockSurface's recorded calls.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<SurfaceCall>>>);

#[cfg(test)]
impl CallLog {
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.0.lock().unwrap().clone()
    }

    /// Index of the first call matching `pred`, if any.
    pub fn position_of(&self, pred: impl Fn(&SurfaceCall) -> bool) -> Option<usize> {
        self.0.lock().unwrap().iter().position(pred)
    }

    pub fn count_of(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.0.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn push(&self, call: SurfaceCall) {
        self.0.lock().unwrap().push(call);
    }
}

/// Surface double that records calls instead of rasterizing.
#[cfg(test)]
pub struct MockSurface {
    width: u32,
    height: u32,
    dpr: f32,
    log: CallLog,
}

#[cfg(test)]
impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dpr: 1.0,
            log: CallLog::default(),
        }
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f32) -> Self {
        self.dpr = dpr;
        self
    }

    /// Shared handle onto the call log.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.log.calls()
    }

    pub fn position_of(&self, pred: impl Fn(&SurfaceCall) -> bool) -> Option<usize> {
        self.log.position_of(pred)
    }

    pub fn count_of(&self, pred: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.log.count_of(pred)
    }
}

#[cfg(test)]
impl Surface for MockSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.log.push(SurfaceCall::SetSize(width, height));
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    fn clear(&mut self, color: Color) {
        self.log.push(SurfaceCall::Clear(color));
    }

    fn save(&mut self) {
        self.log.push(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        self.log.push(SurfaceCall::Restore);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.log.push(SurfaceCall::Scale(sx, sy));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.log.push(SurfaceCall::Translate(dx, dy));
    }

    fn set_blend(&mut self, blend: Blend) {
        self.log.push(SurfaceCall::SetBlend(blend));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _color: Color) {
        self.log.push(SurfaceCall::FillRect { x, y, w, h });
    }

    fn fill_circle(&mut self, x: f32, y: f32, r: f32, _color: Color) {
        self.log.push(SurfaceCall::FillCircle { x, y, r });
    }

    fn fill_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32, _color: Color) {
        self.log.push(SurfaceCall::FillRoundRect { x, y, w, h, r });
    }
}
