use thiserror::Error;

/// Pointer position in CSS pixels, relative to the viewport (`clientX`/`clientY`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&web_sys::MouseEvent> for ClientPoint {
    fn from(ev: &web_sys::MouseEvent) -> Self {
        Self::new(ev.client_x() as f64, ev.client_y() as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Leave,
}

impl PointerEventKind {
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Move => "mousemove",
            Self::Leave => "mouseleave",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListenerError {
    #[error("No window available to listen on")]
    NoWindow,
    #[error("Couldn't register {event} listener: {reason}")]
    Register { event: &'static str, reason: String },
}

pub type PointerCallback = Box<dyn FnMut(ClientPoint)>;

/// Something pointer listeners can be attached to.
///
/// The host hands back a registration token on success; handing the token to
/// `remove_listener` must stop the callback from ever running again.
pub trait ListenerHost {
    type Registration;

    fn add_listener(
        &self,
        kind: PointerEventKind,
        callback: PointerCallback,
    ) -> Result<Self::Registration, ListenerError>;

    fn remove_listener(&self, registration: Self::Registration);
}

/// A single listener registration, removed exactly once on `detach` or drop.
pub struct ListenerGuard<H: ListenerHost> {
    host: H,
    kind: PointerEventKind,
    registration: Option<H::Registration>,
}

impl<H: ListenerHost> ListenerGuard<H> {
    pub fn attach(
        host: H,
        kind: PointerEventKind,
        callback: impl FnMut(ClientPoint) + 'static,
    ) -> Result<Self, ListenerError> {
        let registration = host.add_listener(kind, Box::new(callback))?;
        log::debug!("attached {} listener", kind.event_name());
        Ok(Self {
            host,
            kind,
            registration: Some(registration),
        })
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    pub fn kind(&self) -> PointerEventKind {
        self.kind
    }

    pub fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.host.remove_listener(registration);
            log::debug!("detached {} listener", self.kind.event_name());
        }
    }
}

impl<H: ListenerHost> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        self.detach();
    }
}
