//! Root component: owns the panel state signal and wires component callbacks
//! to the controller.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::participant_panel::ParticipantPanel;
use crate::components::signup_form::SignupForm;
use crate::components::status_banner::StatusBanner;
use crate::state::panel::{PanelState, ParticipantEntry};

#[component]
pub fn App() -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    provide_context(panel);

    #[cfg(feature = "csr")]
    let controller = {
        let config = crate::config::PanelConfig::default();
        crate::controller::PanelController::new(
            crate::net::api::GlooActivitiesApi::new(config.api_base.clone()),
            panel,
            crate::controller::TimeoutScheduler,
            &config,
        )
    };

    #[cfg(feature = "csr")]
    {
        let controller = controller.clone();
        leptos::task::spawn_local(async move { controller.load_activities().await });
    }

    #[cfg(feature = "csr")]
    let on_submit = {
        let controller = controller.clone();
        Callback::new(move |(activity, email): (String, String)| {
            let controller = controller.clone();
            leptos::task::spawn_local(async move { controller.submit_signup(&activity, &email).await });
        })
    };
    #[cfg(not(feature = "csr"))]
    let on_submit = Callback::new(|_: (String, String)| {});

    #[cfg(feature = "csr")]
    let on_unregister = Callback::new(move |entry: ParticipantEntry| {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller
                .unregister_participant(&entry.activity, &entry.email)
                .await;
        });
    });
    #[cfg(not(feature = "csr"))]
    let on_unregister = Callback::new(|_: ParticipantEntry| {});

    view! {
        <main class="activity-panel">
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm on_submit/>
                <StatusBanner/>
            </section>
            <aside id="participants-container">
                <h3>"Participants"</h3>
                <ParticipantPanel on_unregister/>
            </aside>
        </main>
    }
}
