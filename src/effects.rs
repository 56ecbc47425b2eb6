//! Pointer-driven visual effects.
//!
//! Everything in here is plain geometry and listener bookkeeping so it can be
//! tested natively; the Leptos components in `app` only wire DOM events into it.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod listener;
pub mod pointer;
pub mod tilt;

pub use listener::{ClientPoint, ListenerError, ListenerGuard, ListenerHost, PointerEventKind};
pub use pointer::{PointerState, PointerTracker, Viewport, PARALLAX_RANGE_PX};
pub use tilt::{Bounds, TiltState, MAX_TILT_DEG};
