#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use leptos::{prelude::*, task::Executor};
use portfolio_site::{
    app::{track_pointer, TiltCard},
    effects::{ClientPoint, PointerState, TiltState, Viewport},
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("tests run in a browser")
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init)
        .expect("should be able to build a mouse event")
}

fn div() -> HtmlElement {
    document()
        .create_element("div")
        .expect("should create a div")
        .unchecked_into()
}

/// Fixed 200px wide host pinned to the viewport's top-left corner.
fn fixed_container() -> HtmlElement {
    let el = div();
    let style = el.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("left", "0").unwrap();
    style.set_property("top", "0").unwrap();
    style.set_property("width", "200px").unwrap();
    document()
        .body()
        .expect("document should have a body")
        .append_child(&el)
        .unwrap();
    el
}

/// Lets effects and render effects queued by the last update run.
async fn settle() {
    for _ in 0..4 {
        leptos::task::tick().await;
    }
}

/// The browser re-serializes inline transforms, so compare against a value
/// that went through the same setter.
fn normalized_transform(state: TiltState) -> String {
    let scratch = div();
    let style = scratch.style();
    style
        .set_property("transform", &state.transform_css())
        .unwrap();
    style.get_property_value("transform").unwrap()
}

fn transform_of(el: &HtmlElement) -> String {
    el.style().get_property_value("transform").unwrap()
}

#[wasm_bindgen_test]
async fn tilt_card_follows_the_pointer() {
    let _ = Executor::init_wasm_bindgen();
    let container = fixed_container();
    let handle = leptos::mount::mount_to(container.clone(), || {
        view! {
            <TiltCard>
                <div style="width:200px;height:100px"></div>
            </TiltCard>
        }
    });
    settle().await;
    let card: HtmlElement = container
        .first_element_child()
        .expect("card should be mounted")
        .unchecked_into();
    assert_eq!(transform_of(&card), normalized_transform(TiltState::RESTING));

    card.dispatch_event(&mouse("mousemove", 0, 0)).unwrap();
    settle().await;
    let top_left = TiltState {
        rotation_x: 5.0,
        rotation_y: -5.0,
        glow_x: 0.0,
        glow_y: 0.0,
    };
    assert_eq!(transform_of(&card), normalized_transform(top_left));

    card.dispatch_event(&mouse("mousemove", 100, 50)).unwrap();
    settle().await;
    assert_eq!(transform_of(&card), normalized_transform(TiltState::RESTING));

    // Same client point after the card moves right: bounds are read again.
    container.style().set_property("margin-left", "100px").unwrap();
    card.dispatch_event(&mouse("mousemove", 100, 50)).unwrap();
    settle().await;
    let left_edge = TiltState {
        rotation_x: 0.0,
        rotation_y: -5.0,
        glow_x: 0.0,
        glow_y: 50.0,
    };
    assert_eq!(transform_of(&card), normalized_transform(left_edge));

    card.dispatch_event(&mouse("mouseleave", 0, 0)).unwrap();
    settle().await;
    assert_eq!(transform_of(&card), normalized_transform(TiltState::RESTING));

    drop(handle);
    container.remove();
}

#[wasm_bindgen_test]
async fn pointer_tracking_ends_with_its_owner() {
    let _ = Executor::init_wasm_bindgen();
    let window = web_sys::window().expect("tests run in a browser");
    let container = fixed_container();
    let (pointer, set_pointer) = signal(PointerState::CENTER);

    let handle = leptos::mount::mount_to(container.clone(), move || track_pointer(set_pointer));
    settle().await;

    window.dispatch_event(&mouse("mousemove", 150, 25)).unwrap();
    settle().await;
    let expected = PointerState::from_client(ClientPoint::new(150.0, 25.0), Viewport::current());
    assert_eq!(pointer.get_untracked(), expected);

    drop(handle);
    set_pointer.set(PointerState::CENTER);
    window.dispatch_event(&mouse("mousemove", 10, 10)).unwrap();
    settle().await;
    assert_eq!(pointer.get_untracked(), PointerState::CENTER);

    container.remove();
}
