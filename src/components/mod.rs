//! Leptos components for the activity panel.
//!
//! Every component reads `RwSignal<PanelState>` from context and renders a
//! slice of its view-model. Actions leave through `Callback` props so the
//! components never talk to the network themselves.

pub mod activity_list;
pub mod participant_panel;
pub mod signup_form;
pub mod status_banner;
