use super::listener::ClientPoint;

/// Maximum card rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 5.0;
pub const PERSPECTIVE_PX: f64 = 1000.0;

/// An element's bounding client rect. Always re-read per event; layout moves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}

impl From<&web_sys::DomRect> for Bounds {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// A card's simulated pose: rotation in degrees and highlight center in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltState {
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub glow_x: f64,
    pub glow_y: f64,
}

impl Default for TiltState {
    fn default() -> Self {
        Self::RESTING
    }
}

impl TiltState {
    pub const RESTING: Self = Self {
        rotation_x: 0.0,
        rotation_y: 0.0,
        glow_x: 50.0,
        glow_y: 50.0,
    };

    /// Pose for a pointer at `point` over a card occupying `bounds`.
    ///
    /// Moving the pointer down tilts the top edge away (negative X rotation);
    /// moving it right turns the card towards it. Positions outside the bounds
    /// (a stale event from a fast exit) are clamped to the nearest edge, and
    /// degenerate bounds give the resting pose.
    pub fn from_pointer(point: ClientPoint, bounds: Bounds) -> Self {
        if bounds.is_degenerate() {
            log::trace!("degenerate card bounds {bounds:?}, resting");
            return Self::RESTING;
        }
        let local_x = (point.x - bounds.left).clamp(0.0, bounds.width);
        let local_y = (point.y - bounds.top).clamp(0.0, bounds.height);

        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;

        Self {
            // `+ 0.0` folds -0.0 into 0.0 at the center line.
            rotation_x: ((local_y - center_y) / center_y) * -MAX_TILT_DEG + 0.0,
            rotation_y: ((local_x - center_x) / center_x) * MAX_TILT_DEG + 0.0,
            glow_x: (local_x / bounds.width) * 100.0,
            glow_y: (local_y / bounds.height) * 100.0,
        }
    }

    /// Handles a move over the card. `bounds` is `None` while the card's
    /// element isn't mounted, in which case the event is ignored.
    pub fn pointer_moved(&mut self, point: ClientPoint, bounds: Option<Bounds>) {
        if let Some(bounds) = bounds {
            *self = Self::from_pointer(point, bounds);
        }
    }

    pub fn pointer_left(&mut self) {
        *self = Self::RESTING;
    }

    pub fn is_resting(&self) -> bool {
        *self == Self::RESTING
    }

    pub fn transform_css(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg)",
            css_fixed(self.rotation_x),
            css_fixed(self.rotation_y)
        )
    }

    pub fn glow_css(&self) -> String {
        format!(
            "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,255,255,0.8) 0%, rgba(255,255,255,0) 60%)",
            css_fixed(self.glow_x),
            css_fixed(self.glow_y)
        )
    }
}

/// Rounds to the two decimals the CSS carries, without a negative zero.
fn css_fixed(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Bounds {
        Bounds::new(40.0, 300.0, 200.0, 100.0)
    }

    #[test]
    fn test_center_is_resting() {
        let state = TiltState::from_pointer(ClientPoint::new(140.0, 350.0), card());
        assert!(state.is_resting());
        assert!(state.rotation_x.is_sign_positive());
        assert_eq!(
            state.transform_css(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn test_no_negative_zero_in_css() {
        let state = TiltState {
            rotation_x: -0.0001,
            rotation_y: -0.0,
            glow_x: 50.0,
            glow_y: 50.0,
        };
        assert_eq!(
            state.transform_css(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }

    #[test]
    fn test_top_left_corner() {
        let state = TiltState::from_pointer(ClientPoint::new(40.0, 300.0), card());
        assert_eq!(
            state,
            TiltState {
                rotation_x: 5.0,
                rotation_y: -5.0,
                glow_x: 0.0,
                glow_y: 0.0,
            }
        );
    }

    #[test]
    fn test_bottom_right_corner() {
        let state = TiltState::from_pointer(ClientPoint::new(240.0, 400.0), card());
        assert_eq!(
            state,
            TiltState {
                rotation_x: -5.0,
                rotation_y: 5.0,
                glow_x: 100.0,
                glow_y: 100.0,
            }
        );
    }

    #[test]
    fn test_quarter_point() {
        // local (50, 75): dx = -50, dy = 25
        let state = TiltState::from_pointer(ClientPoint::new(90.0, 375.0), card());
        assert_eq!(state.rotation_x, -2.5);
        assert_eq!(state.rotation_y, -2.5);
        assert_eq!(state.glow_x, 25.0);
        assert_eq!(state.glow_y, 75.0);
    }

    #[test]
    fn test_outside_bounds_is_clamped() {
        let state = TiltState::from_pointer(ClientPoint::new(1000.0, -50.0), card());
        assert_eq!(state.rotation_x, MAX_TILT_DEG);
        assert_eq!(state.rotation_y, MAX_TILT_DEG);
        assert_eq!(state.glow_x, 100.0);
        assert_eq!(state.glow_y, 0.0);
    }

    #[test]
    fn test_degenerate_bounds_rest() {
        let point = ClientPoint::new(10.0, 10.0);
        for bounds in [
            Bounds::new(0.0, 0.0, 0.0, 0.0),
            Bounds::new(0.0, 0.0, 100.0, 0.0),
            Bounds::new(0.0, 0.0, -5.0, 20.0),
            Bounds::new(f64::NAN, 0.0, 100.0, 100.0),
        ] {
            let state = TiltState::from_pointer(point, bounds);
            assert!(state.is_resting(), "{bounds:?} produced {state:?}");
            assert!(!state.rotation_x.is_nan());
        }
    }

    #[test]
    fn test_leave_always_resets() {
        let mut state = TiltState::default();
        state.pointer_moved(ClientPoint::new(40.0, 300.0), Some(card()));
        assert!(!state.is_resting());
        state.pointer_left();
        assert_eq!(state, TiltState::RESTING);
        state.pointer_left();
        assert_eq!(state, TiltState::RESTING);
    }

    #[test]
    fn test_repeated_moves_do_not_drift() {
        let mut state = TiltState::default();
        let point = ClientPoint::new(77.0, 333.0);
        state.pointer_moved(point, Some(card()));
        let first = state;
        for _ in 0..50 {
            state.pointer_moved(point, Some(card()));
        }
        assert_eq!(state, first);
    }

    #[test]
    fn test_move_without_element_is_noop() {
        let mut state = TiltState::default();
        state.pointer_moved(ClientPoint::new(40.0, 300.0), None);
        assert!(state.is_resting());

        state.pointer_moved(ClientPoint::new(40.0, 300.0), Some(card()));
        let tilted = state;
        state.pointer_moved(ClientPoint::new(140.0, 350.0), None);
        assert_eq!(state, tilted);
    }

    #[test]
    fn test_bounds_are_not_cached() {
        let mut state = TiltState::default();
        let point = ClientPoint::new(140.0, 350.0);
        state.pointer_moved(point, Some(card()));
        assert!(state.is_resting());
        // same pointer, card shifted right after a resize
        state.pointer_moved(point, Some(Bounds::new(140.0, 300.0, 200.0, 100.0)));
        assert_eq!(state.rotation_y, -MAX_TILT_DEG);
        assert_eq!(state.glow_x, 0.0);
    }

    #[test]
    fn test_cards_are_independent() {
        let mut a = TiltState::default();
        let mut b = TiltState::default();
        let bounds_a = card();
        let bounds_b = Bounds::new(300.0, 300.0, 200.0, 100.0);

        let path_a = [(40.0, 300.0), (60.0, 320.0), (90.0, 375.0)];
        let path_b = [(500.0, 400.0), (450.0, 350.0)];
        for (i, (ax, ay)) in path_a.into_iter().enumerate() {
            a.pointer_moved(ClientPoint::new(ax, ay), Some(bounds_a));
            if let Some((bx, by)) = path_b.get(i) {
                b.pointer_moved(ClientPoint::new(*bx, *by), Some(bounds_b));
            }
        }
        assert_eq!(a, TiltState::from_pointer(ClientPoint::new(90.0, 375.0), bounds_a));
        assert_eq!(b, TiltState::from_pointer(ClientPoint::new(450.0, 350.0), bounds_b));

        b.pointer_left();
        assert!(b.is_resting());
        assert!(!a.is_resting());
    }

    #[test]
    fn test_css_rendering() {
        assert_eq!(
            TiltState::RESTING.transform_css(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
        );
        assert!(TiltState::RESTING
            .glow_css()
            .starts_with("radial-gradient(circle at 50.00% 50.00%,"));
    }
}
