//! Main list of activity cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows every activity from the latest snapshot with its description,
//! schedule and remaining capacity, so students can pick one before signing up.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::panel::{ActivityListView, ActivityRow, LOAD_FAILED, LOADING_ACTIVITIES, PanelState};

/// Activity cards, or the loading/failure placeholder.
#[component]
pub fn ActivityList() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    view! {
        <div id="activities-list">
            {move || match panel.with(|s| s.view.activities.clone()) {
                ActivityListView::Loading => view! { <p>{LOADING_ACTIVITIES}</p> }.into_any(),
                ActivityListView::Failed => view! { <p>{LOAD_FAILED}</p> }.into_any(),
                ActivityListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <ActivityCard row/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

/// One activity card.
#[component]
fn ActivityCard(row: ActivityRow) -> impl IntoView {
    let availability = row.availability_label();

    view! {
        <div class="activity-card">
            <h4>{row.name}</h4>
            <p>{row.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {row.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
        </div>
    }
}
