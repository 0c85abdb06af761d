//! DOM wiring: canvas sizing, event listeners, and the frame loop.
//!
//! Everything here is plumbing around [`Engine`]: it finds the page's canvas,
//! sizes it from the window and device pixel ratio, feeds pointer events and
//! animation-frame timestamps in, and applies the cursor actions that come
//! back. Move/up listeners exist on the window only while a drag is in
//! flight — the idle scene costs nothing per pointer move.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, PointerEvent, Window};

use crate::config::SceneConfig;
use crate::engine::{Action, Engine};
use crate::geometry::Point;

/// JS-side handles for the drag-scoped listeners.
///
/// The closures themselves are created once and leaked at startup; only their
/// registration on the window toggles with the drag, so no closure is ever
/// dropped while it might still be executing.
#[derive(Clone)]
struct DragCallbacks {
    move_fn: Function,
    up_fn: Function,
}

struct Host {
    engine: Engine,
    canvas: HtmlCanvasElement,
    drag_callbacks: Option<DragCallbacks>,
    drag_attached: bool,
}

type Shared = Rc<RefCell<Host>>;

/// Mount the scene on the page's `<canvas>` element and start the frame loop.
///
/// # Errors
///
/// Returns `Err` when the DOM lacks a window, document, or canvas, or when
/// the canvas cannot provide a 2D context.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .query_selector("canvas")?
        .ok_or_else(|| JsValue::from_str("no <canvas> element on the page"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let config = read_config(&canvas);
    log::info!("mounting rubberbox scene (label {:?})", config.label);

    let mut engine = Engine::new(canvas.clone(), config)?;
    apply_viewport(&mut engine, &window);
    engine.render()?;

    let host: Shared = Rc::new(RefCell::new(Host {
        engine,
        canvas,
        drag_callbacks: None,
        drag_attached: false,
    }));
    let callbacks = create_drag_callbacks(&host, &window);
    host.borrow_mut().drag_callbacks = Some(callbacks);

    attach_pointer_down(&host, &window)?;
    attach_resize(&host, &window)?;
    start_frame_loop(&host, &window)?;
    Ok(())
}

/// Scene config from the canvas element's `data-config` attribute, if any.
fn read_config(canvas: &HtmlCanvasElement) -> SceneConfig {
    let Some(json) = canvas.get_attribute("data-config") else {
        return SceneConfig::default();
    };
    match SceneConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring malformed data-config: {err}");
            SceneConfig::default()
        }
    }
}

/// Size the canvas to the window at the effective pixel ratio and re-init.
///
/// High-density displays use a fixed 2x backing store, everything else 1x.
fn apply_viewport(engine: &mut Engine, window: &Window) {
    let dpr = if window.device_pixel_ratio() > 1.0 { 2.0 } else { 1.0 };
    let width = window
        .inner_width()
        .map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let height = window
        .inner_height()
        .map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    engine.set_viewport(width, height, dpr);
}

/// Pointer event position scaled into device pixels.
fn pointer_point(ev: &PointerEvent, dpr: f64) -> Point {
    Point::new(f64::from(ev.client_x()) * dpr, f64::from(ev.client_y()) * dpr)
}

fn apply_actions(canvas: &HtmlCanvasElement, actions: &[Action]) {
    for action in actions {
        match action {
            Action::SetCursor(value) => {
                if let Err(err) = canvas.style().set_property("cursor", value) {
                    log::warn!("failed to set cursor: {err:?}");
                }
            }
        }
    }
}

/// Add or remove the window move/up listeners to match the drag state.
fn set_drag_listeners(host: &Shared, window: &Window, attach: bool) {
    let (callbacks, attached) = {
        let h = host.borrow();
        (h.drag_callbacks.clone(), h.drag_attached)
    };
    let Some(cb) = callbacks else {
        return;
    };
    if attach == attached {
        return;
    }
    let result = if attach {
        window
            .add_event_listener_with_callback("pointermove", &cb.move_fn)
            .and_then(|()| window.add_event_listener_with_callback("pointerup", &cb.up_fn))
    } else {
        window
            .remove_event_listener_with_callback("pointermove", &cb.move_fn)
            .and_then(|()| window.remove_event_listener_with_callback("pointerup", &cb.up_fn))
    };
    match result {
        Ok(()) => host.borrow_mut().drag_attached = attach,
        Err(err) => log::warn!("drag listener toggle failed: {err:?}"),
    }
}

/// Build the drag-scoped move/up closures and return their JS handles.
fn create_drag_callbacks(host: &Shared, window: &Window) -> DragCallbacks {
    let host_move = Rc::clone(host);
    let window_move = window.clone();
    let on_move = Closure::wrap(Box::new(move |ev: PointerEvent| {
        let still_dragging = {
            let mut h = host_move.borrow_mut();
            let p = pointer_point(&ev, h.engine.core.dpr);
            let actions = h.engine.on_pointer_move(p);
            apply_actions(&h.canvas, &actions);
            h.engine.core.is_dragging()
        };
        if !still_dragging {
            // The distance cap tripped inside this move.
            set_drag_listeners(&host_move, &window_move, false);
        }
    }) as Box<dyn FnMut(PointerEvent)>);

    let host_up = Rc::clone(host);
    let window_up = window.clone();
    let on_up = Closure::wrap(Box::new(move |_ev: PointerEvent| {
        {
            let mut h = host_up.borrow_mut();
            let actions = h.engine.on_pointer_up();
            apply_actions(&h.canvas, &actions);
        }
        set_drag_listeners(&host_up, &window_up, false);
    }) as Box<dyn FnMut(PointerEvent)>);

    let move_fn = on_move.as_ref().unchecked_ref::<Function>().clone();
    let up_fn = on_up.as_ref().unchecked_ref::<Function>().clone();
    on_move.forget();
    on_up.forget();
    DragCallbacks { move_fn, up_fn }
}

/// Permanent pointer-down listener; drags start here.
fn attach_pointer_down(host: &Shared, window: &Window) -> Result<(), JsValue> {
    let host_cb = Rc::clone(host);
    let window_cb = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: PointerEvent| {
        let dragging = {
            let mut h = host_cb.borrow_mut();
            let p = pointer_point(&ev, h.engine.core.dpr);
            let actions = h.engine.on_pointer_down(p);
            apply_actions(&h.canvas, &actions);
            h.engine.core.is_dragging()
        };
        if dragging {
            set_drag_listeners(&host_cb, &window_cb, true);
        }
    }) as Box<dyn FnMut(PointerEvent)>);
    window.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Window resize triggers a full re-init, never a partial update.
fn attach_resize(host: &Shared, window: &Window) -> Result<(), JsValue> {
    let host_cb = Rc::clone(host);
    let window_cb = window.clone();
    let closure = Closure::wrap(Box::new(move |_ev: Event| {
        let mut h = host_cb.borrow_mut();
        apply_viewport(&mut h.engine, &window_cb);
        log::info!(
            "viewport re-initialized to {}x{} device pixels",
            h.engine.core.viewport_width,
            h.engine.core.viewport_height
        );
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Drive the engine from the browser's animation-frame callback.
fn start_frame_loop(host: &Shared, window: &Window) -> Result<(), JsValue> {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_cb = Rc::clone(&holder);
    let host_cb = Rc::clone(host);
    let window_cb = window.clone();

    let closure = Closure::wrap(Box::new(move |now_ms: f64| {
        {
            let mut h = host_cb.borrow_mut();
            if h.engine.tick(now_ms) {
                if let Err(err) = h.engine.render() {
                    log::error!("render failed: {err:?}");
                }
            }
        }
        if let Some(cb) = holder_cb.borrow().as_ref() {
            if let Err(err) = window_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("failed to schedule next frame: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    *holder.borrow_mut() = Some(closure);
    Ok(())
}
