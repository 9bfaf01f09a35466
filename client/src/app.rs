//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::{canvas_host::CanvasHost, toolbar::Toolbar};
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Resolves the color scheme once, provides the shared `UiState`, and lays
/// out the tool bar above the drawing surface.
#[component]
pub fn App() -> impl IntoView {
    let preferred = theme::read_preference();
    theme::apply(preferred);

    let ui = RwSignal::new(UiState::with_theme(preferred));
    provide_context(ui);

    let class = format!("whiteboard whiteboard--{}", theme::name(preferred));

    view! {
        <div class=class>
            <Toolbar/>
            <CanvasHost/>
        </div>
    }
}
