//! Tool bar with the Pencil / Eraser selectors and the Clear action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buttons only write `UiState`; `CanvasHost` observes it and drives the engine.

use leptos::prelude::*;

use canvas::input::Tool;

use crate::state::ui::UiState;

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

/// Tools offered by the bar, in display order.
pub const TOOLS: [Tool; 2] = [Tool::Pencil, Tool::Eraser];

/// CSS class for a tool button; the active tool gets the filled variant.
pub fn tool_button_class(active: bool) -> &'static str {
    if active { "tool-button tool-button--default" } else { "tool-button tool-button--outline" }
}

/// Top tool bar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let tool_button = move |tool: Tool| {
        let is_active = move || ui.with(|u| u.is_active(tool));
        view! {
            <button
                type="button"
                class=move || tool_button_class(is_active())
                aria-pressed=move || is_active().to_string()
                on:click=move |_| ui.update(|u| u.select(tool))
            >
                {tool.label()}
            </button>
        }
    };

    view! {
        <div class="whiteboard__toolbar">
            {TOOLS.into_iter().map(tool_button).collect_view()}
            <button
                type="button"
                class="tool-button tool-button--outline whiteboard__clear"
                on:click=move |_| ui.update(UiState::request_clear)
            >
                "Clear"
            </button>
        </div>
    }
}
