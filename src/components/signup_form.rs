//! Signup form: email input, activity select, submit button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs write straight into `PanelState::form`; submitting hands the current
//! values to `on_submit`. The button follows `form.submitting`, which the
//! controller holds for the duration of the request.

use leptos::prelude::*;

use crate::state::panel::{ActivityOptionsView, LOAD_FAILED, PanelState, SELECT_PLACEHOLDER};

/// Signup form bound to `PanelState::form`.
#[component]
pub fn SignupForm(on_submit: Callback<(String, String)>) -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    let submitting = move || panel.with(|s| s.form.submitting);
    let options_failed = move || panel.with(|s| s.view.options == ActivityOptionsView::Failed);
    let options = move || {
        panel.with(|s| match &s.view.options {
            ActivityOptionsView::Options(options) => options.clone(),
            ActivityOptionsView::Loading | ActivityOptionsView::Failed => Vec::new(),
        })
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (activity, email) = panel.with_untracked(|s| (s.form.activity.clone(), s.form.email.clone()));
        on_submit.run((activity, email));
    };

    view! {
        <form id="signup-form" on:submit=on_form_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || panel.with(|s| s.form.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|s| s.form.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        panel.update(|s| s.form.activity = value);
                    }
                >
                    <option value="" prop:selected=move || panel.with(|s| s.form.activity.is_empty())>
                        {SELECT_PLACEHOLDER}
                    </option>
                    <Show when=options_failed>
                        <option value="" disabled=true>
                            {LOAD_FAILED}
                        </option>
                    </Show>
                    {move || {
                        options()
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                let selected = move || panel.with(|s| s.form.activity == value);
                                view! {
                                    <option value=option.value prop:selected=selected>
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit" disabled=submitting>
                "Sign Up"
            </button>
        </form>
    }
}
