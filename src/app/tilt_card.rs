use leptos::{ev::MouseEvent, html, prelude::*};

use crate::effects::{Bounds, ClientPoint, TiltState};

const NOISE_TEXTURE: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.65' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E\")";

/// Glass card that tilts towards the pointer and tracks a specular highlight.
///
/// Each card owns its tilt state; the bounding rect is read fresh on every
/// move since the card may have been laid out again since the last one.
#[component]
pub fn TiltCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(TiltState::RESTING);

    let on_move = move |ev: MouseEvent| {
        let bounds = card_ref
            .get_untracked()
            .map(|el| Bounds::from(&el.get_bounding_client_rect()));
        set_tilt.update(|t| t.pointer_moved(ClientPoint::from(&ev), bounds));
    };
    let on_leave = move |_: MouseEvent| set_tilt.update(TiltState::pointer_left);

    view! {
        <div
            node_ref=card_ref
            on:mousemove=on_move
            on:mouseleave=on_leave
            style:transform=move || tilt.get().transform_css()
            class=format!(
                "relative transition-all duration-200 ease-out transform-gpu overflow-hidden {class}",
            )
        >
            <div
                class="absolute inset-0 opacity-[0.03] pointer-events-none z-0 mix-blend-overlay"
                style:background-image=NOISE_TEXTURE
            />
            <div
                class="absolute inset-0 pointer-events-none z-20 mix-blend-overlay transition-opacity duration-300 opacity-10"
                style:background=move || tilt.get().glow_css()
            />
            <div class="relative z-10">{children()}</div>
        </div>
    }
}
