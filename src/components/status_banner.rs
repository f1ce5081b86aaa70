//! Transient success/error message below the signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reports the outcome of the last signup or unregister. The controller hides
//! it again after the configured delay.

use leptos::prelude::*;

use crate::state::panel::PanelState;

/// Status message banner.
#[component]
pub fn StatusBanner() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    view! {
        <div id="message" class=move || panel.with(|s| s.status.class_list()) role="status">
            {move || panel.with(|s| s.status.text.clone())}
        </div>
    }
}
