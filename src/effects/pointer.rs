use super::listener::{ClientPoint, ListenerError, ListenerGuard, ListenerHost, PointerEventKind};

/// How far the background grid drifts, in pixels, at the viewport edges.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

/// Pointer position normalized to [-1, 1] on both axes, 0,0 being the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    pub fn from_client(point: ClientPoint, viewport: Viewport) -> Self {
        if viewport.is_degenerate() {
            return Self::CENTER;
        }
        Self {
            x: (point.x / viewport.width) * 2.0 - 1.0,
            y: (point.y / viewport.height) * 2.0 - 1.0,
        }
    }

    pub fn parallax_offset(&self, range: f64) -> (f64, f64) {
        (self.x * range, self.y * range)
    }

    pub fn translate_css(&self, range: f64) -> String {
        let (dx, dy) = self.parallax_offset(range);
        format!("translate({dx:.2}px, {dy:.2}px)")
    }
}

/// Page-wide pointer tracking: one move listener on the host for as long as
/// the tracker lives, publishing a fresh `PointerState` for every event.
pub struct PointerTracker<H: ListenerHost> {
    guard: ListenerGuard<H>,
}

impl<H: ListenerHost> PointerTracker<H> {
    /// `viewport` is asked on every event so resizes are picked up.
    pub fn mount(
        host: H,
        viewport: impl Fn() -> Viewport + 'static,
        mut publish: impl FnMut(PointerState) + 'static,
    ) -> Result<Self, ListenerError> {
        let guard = ListenerGuard::attach(host, PointerEventKind::Move, move |point| {
            publish(PointerState::from_client(point, viewport()))
        })?;
        Ok(Self { guard })
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_attached()
    }

    pub fn unmount(mut self) {
        self.guard.detach();
    }
}
