use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{EventTarget, MouseEvent};

use super::listener::{ClientPoint, ListenerError, ListenerHost, PointerCallback, PointerEventKind};
use super::pointer::Viewport;

/// Browser event target (usually `window`) that pointer listeners attach to.
pub struct DomHost {
    target: EventTarget,
}

pub struct DomRegistration {
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl DomHost {
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }

    pub fn window() -> Result<Self, ListenerError> {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        Ok(Self::new(window.into()))
    }
}

impl ListenerHost for DomHost {
    type Registration = DomRegistration;

    fn add_listener(
        &self,
        kind: PointerEventKind,
        mut callback: PointerCallback,
    ) -> Result<DomRegistration, ListenerError> {
        let event = kind.event_name();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            callback(ClientPoint::from(&ev))
        });
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| ListenerError::Register {
                event,
                reason: format!("{err:?}"),
            })?;
        Ok(DomRegistration { event, closure })
    }

    fn remove_listener(&self, registration: DomRegistration) {
        let DomRegistration { event, closure } = registration;
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("couldn't remove {event} listener: {err:?}");
        }
    }
}

impl Viewport {
    /// Current `innerWidth`/`innerHeight`; zero when there is no window.
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
        };
        Self::new(
            dimension(window.inner_width()),
            dimension(window.inner_height()),
        )
    }
}
