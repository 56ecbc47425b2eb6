use leptos::prelude::*;

use crate::effects::{PointerState, PARALLAX_RANGE_PX};

/// Page-wide normalized pointer position.
///
/// On the server the signal simply stays centered.
pub fn use_pointer_tracker() -> ReadSignal<PointerState> {
    let (pointer, set_pointer) = signal(PointerState::CENTER);
    track_pointer(set_pointer);
    pointer
}

/// Publishes viewport pointer moves into `set_pointer`.
///
/// On the client this mounts a single `mousemove` listener on `window` for
/// the lifetime of the current owner and removes it on cleanup.
pub fn track_pointer(set_pointer: WriteSignal<PointerState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::effects::{dom::DomHost, PointerTracker, Viewport};

        let tracker = StoredValue::new_local(None::<PointerTracker<DomHost>>);
        Effect::new(move |_| {
            if tracker.with_value(Option::is_some) {
                return;
            }
            let mounted = DomHost::window().and_then(|host| {
                PointerTracker::mount(host, Viewport::current, move |state| {
                    set_pointer.set(state)
                })
            });
            match mounted {
                Ok(t) => tracker.set_value(Some(t)),
                Err(err) => log::warn!("parallax disabled: {err}"),
            }
        });
        on_cleanup(move || {
            tracker.update_value(|t| {
                if let Some(t) = t.take() {
                    t.unmount();
                }
            })
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_pointer;
}

#[component]
pub fn ParallaxBackground(pointer: ReadSignal<PointerState>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden">
            <div class="absolute top-0 left-1/4 w-96 h-96 bg-purple-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-40 animate-blob" />
            <div class="absolute top-0 right-1/4 w-96 h-96 bg-cyan-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-40 animate-blob animation-delay-2000" />
            <div class="absolute -bottom-32 left-1/3 w-96 h-96 bg-blue-500 rounded-full mix-blend-multiply filter blur-[128px] opacity-40 animate-blob animation-delay-4000" />
            <div
                class="absolute inset-0 opacity-20 depth-grid"
                style:transform=move || pointer.get().translate_css(PARALLAX_RANGE_PX)
            />
        </div>
    }
}
