// src/app/browser_event_manager.rs
//! Handles attaching and detaching browser event listeners and the tick interval.
//!
//! リスナーは入力を `InputEvent` にして Simulation のキューに積むだけ。
//! 実際の処理はティックの中でやる。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use crate::app::renderer::Renderer;
use crate::config::DomConfig;
use crate::ecs::Entity;
use crate::input::InputEvent;
use crate::simulation::Simulation;

/// 付けたリスナー 1 つ分。外すときのためにターゲットとイベント名も持っておく。
pub(crate) struct ListenerHandle {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// setInterval で回してるティック。
pub(crate) struct Ticker {
    handle: i32,
    // クロージャを drop すると JS 側から呼べなくなるので持っておく
    _closure: Closure<dyn FnMut()>,
}

/// Mutex を取る。毒されてても中身を取り出して続ける。
pub(crate) fn lock_simulation(simulation: &Arc<Mutex<Simulation>>) -> MutexGuard<'_, Simulation> {
    match simulation.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Simulation mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

fn push_input(simulation: &Arc<Mutex<Simulation>>, event: InputEvent) {
    lock_simulation(simulation).push_input(event);
}

fn listen(
    target: &EventTarget,
    event_type: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<ListenerHandle, JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    Ok(ListenerHandle {
        target: target.clone(),
        event_type,
        closure,
    })
}

/// 指 1 本のときだけその座標を返す。マルチタッチは無視。
fn single_touch_point(event: &TouchEvent) -> Option<(f32, f32)> {
    let touches = event.touches();
    let first = touches.get(0).map(|touch| (touch.client_x() as f32, touch.client_y() as f32));
    only_single_touch(touches.length(), first)
}

/// タッチ数が 1 のときだけ座標を通す。0 本 (touchend 後) も 2 本以上 (ピンチ) も `None`。
pub(crate) fn only_single_touch(touch_count: u32, first: Option<(f32, f32)>) -> Option<(f32, f32)> {
    if touch_count == 1 {
        first
    } else {
        None
    }
}

/// カードごとのドラッグ開始リスナー (mousedown / touchstart)。
pub(crate) fn attach_card_listeners(
    simulation: &Arc<Mutex<Simulation>>,
    cards: &[(Entity, HtmlElement)],
) -> Result<Vec<ListenerHandle>, JsValue> {
    let mut handles = Vec::with_capacity(cards.len() * 2);

    for (entity, element) in cards {
        let entity = *entity;

        let sim = Arc::clone(simulation);
        handles.push(listen(element, "mousedown", move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in mousedown listener");
                return;
            };
            mouse_event.prevent_default();
            push_input(
                &sim,
                InputEvent::PointerDown {
                    entity,
                    client_x: mouse_event.client_x() as f32,
                    client_y: mouse_event.client_y() as f32,
                },
            );
        })?);

        let sim = Arc::clone(simulation);
        handles.push(listen(element, "touchstart", move |event: Event| {
            let Ok(touch_event) = event.dyn_into::<TouchEvent>() else {
                error!("Failed to cast event to TouchEvent in touchstart listener");
                return;
            };
            if let Some((client_x, client_y)) = single_touch_point(&touch_event) {
                touch_event.prevent_default();
                push_input(&sim, InputEvent::PointerDown { entity, client_x, client_y });
            }
        })?);
    }

    debug!("Attached drag-start listeners to {} cards", cards.len());
    Ok(handles)
}

/// ドキュメント全体のドラッグ移動・終了リスナー。
pub(crate) fn attach_document_listeners(
    simulation: &Arc<Mutex<Simulation>>,
    document: &Document,
) -> Result<Vec<ListenerHandle>, JsValue> {
    let mut handles = Vec::with_capacity(4);

    let sim = Arc::clone(simulation);
    handles.push(listen(document, "mousemove", move |event: Event| {
        if let Ok(mouse_event) = event.dyn_into::<MouseEvent>() {
            push_input(
                &sim,
                InputEvent::PointerMove {
                    client_x: mouse_event.client_x() as f32,
                    client_y: mouse_event.client_y() as f32,
                },
            );
        }
    })?);

    let sim = Arc::clone(simulation);
    handles.push(listen(document, "touchmove", move |event: Event| {
        let Ok(touch_event) = event.dyn_into::<TouchEvent>() else {
            return;
        };
        if let Some((client_x, client_y)) = single_touch_point(&touch_event) {
            push_input(&sim, InputEvent::PointerMove { client_x, client_y });
        }
    })?);

    for event_type in ["mouseup", "touchend"] {
        let sim = Arc::clone(simulation);
        handles.push(listen(document, event_type, move |_event: Event| {
            push_input(&sim, InputEvent::PointerUp);
        })?);
    }

    Ok(handles)
}

/// シャッフル / スローボタン。見つからなければ何も付けない。
pub(crate) fn attach_action_buttons(
    simulation: &Arc<Mutex<Simulation>>,
    document: &Document,
    dom: &DomConfig,
) -> Result<Vec<ListenerHandle>, JsValue> {
    let mut handles = Vec::with_capacity(2);

    for (button_id, action) in [
        (&dom.shuffle_button_id, InputEvent::Shuffle),
        (&dom.throw_button_id, InputEvent::Throw),
    ] {
        let Some(button) = document.get_element_by_id(button_id) else {
            warn!("Button #{} not found, {:?} is not wired", button_id, action);
            continue;
        };
        let sim = Arc::clone(simulation);
        handles.push(listen(&button, "click", move |_event: Event| {
            push_input(&sim, action);
        })?);
    }

    Ok(handles)
}

/// 全部外す。
pub(crate) fn detach_listeners(handles: &mut Vec<ListenerHandle>) {
    for handle in handles.drain(..) {
        if let Err(e) = handle
            .target
            .remove_event_listener_with_callback(handle.event_type, handle.closure.as_ref().unchecked_ref())
        {
            error!("Failed to detach {} listener: {:?}", handle.event_type, e);
        }
    }
}

/// ティックを回して、毎回描画まで済ませる。
pub(crate) fn run_frame(simulation: &Arc<Mutex<Simulation>>, renderer: &Arc<Mutex<Renderer>>) {
    let snapshot = {
        let mut sim = lock_simulation(simulation);
        sim.tick();
        sim.snapshot()
    };
    match renderer.lock() {
        Ok(renderer) => renderer.render(&snapshot),
        Err(e) => error!("Failed to lock renderer: {}", e),
    }
}

/// setInterval でティックを開始する。
pub(crate) fn start_ticker(
    simulation: &Arc<Mutex<Simulation>>,
    renderer: &Arc<Mutex<Renderer>>,
    interval_ms: u32,
) -> Result<Ticker, JsValue> {
    let window = web_sys::window().ok_or("Failed to get window")?;
    let timeout = i32::try_from(interval_ms)
        .map_err(|_| JsValue::from_str(&format!("Tick interval {}ms is too long", interval_ms)))?;

    let sim = Arc::clone(simulation);
    let renderer = Arc::clone(renderer);
    let closure = Closure::wrap(Box::new(move || run_frame(&sim, &renderer)) as Box<dyn FnMut()>);

    let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    debug!("Ticker started every {}ms (handle {})", interval_ms, handle);
    Ok(Ticker {
        handle,
        _closure: closure,
    })
}

/// ティックを止める。
pub(crate) fn stop_ticker(ticker: Ticker) {
    match web_sys::window() {
        Some(window) => window.clear_interval_with_handle(ticker.handle),
        None => warn!("No window while stopping ticker {}", ticker.handle),
    }
}
