//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the bitmap and stroke state. This host mounts it once the
//! `<canvas>` element exists, maps pointer events and the window `resize`
//! notification onto it, and forwards tool and clear requests from `UiState`.
//! If the element yields no 2D context the engine is never created and the
//! element stays inert.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::Engine;

#[cfg(feature = "csr")]
use crate::util::canvas_input::{pointer_point, report};
#[cfg(feature = "csr")]
use crate::util::config;

/// Canvas host component.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "csr")]
    let last_clear_seq = RwSignal::new(ui.get_untracked().clear_seq);

    // Mount once the element is in the DOM.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let state = ui.get_untracked();
            match Engine::mount(canvas, config::load(state.theme)) {
                Ok(mut instance) => {
                    instance.select_tool(state.active_tool);
                    last_clear_seq.set(state.clear_seq);
                    *engine.borrow_mut() = Some(instance);
                }
                Err(err) => log::error!("whiteboard disabled: {err}"),
            }
        });
    }

    // Tool selection and clear requests.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let state = ui.get();
            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            engine.select_tool(state.active_tool);
            if state.clear_seq != last_clear_seq.get_untracked() {
                last_clear_seq.set(state.clear_seq);
                report(engine.clear());
            }
        });
    }

    // Window resize subscription, released with the component.
    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                report(engine.handle_resize());
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    report(engine.on_pointer_down(pointer_point(&ev)));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    report(engine.on_pointer_move(pointer_point(&ev)));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_leave();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div class="whiteboard__surface">
            <canvas
                class="whiteboard__canvas"
                data-tool=move || ui.with(|u| u.active_tool.label())
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
