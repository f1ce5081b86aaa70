//! Side panel listing participants per activity, each with an unregister button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rosters are rebuilt from the same snapshot as the activity list. Each
//! unregister button carries its own `ParticipantEntry`, so a click reports
//! exactly the (activity, email) pair it was rendered for.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::panel::{
    NO_PARTICIPANTS, PARTICIPANTS_LOAD_FAILED, PanelState, ParticipantCard, ParticipantEntry, ParticipantPanelView,
};

const LOADING_PARTICIPANTS: &str = "Loading participants...";

/// Roster cards for activities with participants, or a placeholder.
#[component]
pub fn ParticipantPanel(on_unregister: Callback<ParticipantEntry>) -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    view! {
        <div id="activity-cards">
            {move || match panel.with(|s| s.view.participants.clone()) {
                ParticipantPanelView::Loading => view! { <p>{LOADING_PARTICIPANTS}</p> }.into_any(),
                ParticipantPanelView::Empty => view! { <p>{NO_PARTICIPANTS}</p> }.into_any(),
                ParticipantPanelView::Failed => view! { <p>{PARTICIPANTS_LOAD_FAILED}</p> }.into_any(),
                ParticipantPanelView::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <RosterCard card on_unregister/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

/// Roster for one activity.
#[component]
fn RosterCard(card: ParticipantCard, on_unregister: Callback<ParticipantEntry>) -> impl IntoView {
    let count = card.count_label();
    let items = card
        .participants
        .into_iter()
        .map(|entry| {
            let email = entry.email.clone();
            let title = format!("Unregister {email}");
            view! {
                <div class="participant-item">
                    <span class="participant-email">{email}</span>
                    <button
                        class="unregister-btn"
                        type="button"
                        title=title
                        on:click=move |_| on_unregister.run(entry.clone())
                    >
                        "✕"
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="participant-card">
            <h4>{card.activity}</h4>
            <div class="participant-count">{count}</div>
            <div class="participant-list">{items}</div>
        </div>
    }
}
