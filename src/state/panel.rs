//! Activity panel state: the rendered view-model, the signup form, and the
//! status message.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render only what is in [`PanelView`]. The view is rebuilt from a
//! whole [`ActivitiesSnapshot`] in one pass and swapped in with a single
//! assignment, so the three regions (activity list, select options,
//! participant cards) always come from the same snapshot.
//!
//! Snapshot loads are sequenced: [`PanelState::begin_load`] hands out a
//! generation token and only the newest token may change the regions.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use super::status::{StatusKind, StatusMessage};
use crate::net::api::ApiError;
use crate::net::types::ActivitiesSnapshot;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOADING_ACTIVITIES: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const PARTICIPANTS_LOAD_FAILED: &str = "Failed to load participant activity cards.";
pub const NO_PARTICIPANTS: &str = "No participants registered yet.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// One activity card in the main list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
}

impl ActivityRow {
    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One `<option>` of the activity select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityOption {
    pub value: String,
    pub label: String,
}

/// A participant line; also the argument of the unregister callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub activity: String,
    pub email: String,
}

/// Roster card for an activity with at least one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantCard {
    pub activity: String,
    pub participants: Vec<ParticipantEntry>,
}

impl ParticipantCard {
    pub fn count_label(&self) -> String {
        format!("{} participant(s)", self.participants.len())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivityListView {
    #[default]
    Loading,
    Rows(Vec<ActivityRow>),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivityOptionsView {
    #[default]
    Loading,
    Options(Vec<ActivityOption>),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ParticipantPanelView {
    #[default]
    Loading,
    /// No activity has participants; shows [`NO_PARTICIPANTS`].
    Empty,
    Cards(Vec<ParticipantCard>),
    Failed,
}

/// Everything the three panel regions render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelView {
    pub activities: ActivityListView,
    pub options: ActivityOptionsView,
    pub participants: ParticipantPanelView,
}

impl PanelView {
    /// Build all three regions from one snapshot.
    pub fn from_snapshot(snapshot: &ActivitiesSnapshot) -> Self {
        let mut rows = Vec::with_capacity(snapshot.len());
        let mut options = Vec::with_capacity(snapshot.len());
        let mut cards = Vec::new();

        for (name, activity) in snapshot.iter() {
            rows.push(ActivityRow {
                name: name.to_owned(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
            });
            options.push(ActivityOption {
                value: name.to_owned(),
                label: name.to_owned(),
            });
            if !activity.participants.is_empty() {
                cards.push(ParticipantCard {
                    activity: name.to_owned(),
                    participants: activity
                        .participants
                        .iter()
                        .map(|email| ParticipantEntry {
                            activity: name.to_owned(),
                            email: email.clone(),
                        })
                        .collect(),
                });
            }
        }

        let participants = if cards.is_empty() {
            ParticipantPanelView::Empty
        } else {
            ParticipantPanelView::Cards(cards)
        };

        Self {
            activities: ActivityListView::Rows(rows),
            options: ActivityOptionsView::Options(options),
            participants,
        }
    }

    /// All three regions showing their failure placeholders.
    pub fn failed() -> Self {
        Self {
            activities: ActivityListView::Failed,
            options: ActivityOptionsView::Failed,
            participants: ParticipantPanelView::Failed,
        }
    }
}

/// Signup form inputs plus the in-flight flag that disables the submit button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
    pub submitting: bool,
}

impl SignupForm {
    /// Clear the inputs. The in-flight flag is left alone.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

#[derive(Clone, Debug, Default)]
pub struct PanelState {
    pub view: PanelView,
    pub form: SignupForm,
    pub status: StatusMessage,
    /// Newest generation token handed out by `begin_load`.
    load_seq: u64,
}

impl PanelState {
    /// Take a generation token for a new snapshot request.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// Whether `seq` is the newest load token.
    pub fn is_current_load(&self, seq: u64) -> bool {
        seq == self.load_seq
    }

    /// Render a fetched snapshot. Returns `false` and leaves the view alone
    /// when a newer load has been started since `seq` was issued.
    pub fn apply_snapshot(&mut self, seq: u64, snapshot: &ActivitiesSnapshot) -> bool {
        if !self.is_current_load(seq) {
            return false;
        }
        self.view = PanelView::from_snapshot(snapshot);
        true
    }

    /// Show failure placeholders in every region, subject to the same token
    /// check as `apply_snapshot`. The status message is not touched.
    pub fn apply_load_failure(&mut self, seq: u64) -> bool {
        if !self.is_current_load(seq) {
            return false;
        }
        self.view = PanelView::failed();
        true
    }

    /// Mark a signup as in flight. Returns `false` if one already is.
    pub fn begin_signup(&mut self) -> bool {
        if self.form.submitting {
            return false;
        }
        self.form.submitting = true;
        true
    }

    /// Settle a signup: re-enable submit, show the outcome, clear the form on
    /// success. Returns the status sequence number to schedule a hide for.
    pub fn finish_signup(&mut self, result: &Result<String, ApiError>) -> u64 {
        self.form.submitting = false;
        match result {
            Ok(message) => {
                self.form.reset();
                self.status.show(message.clone(), StatusKind::Success)
            }
            Err(err) => self
                .status
                .show(err.rejection_message().unwrap_or(SIGNUP_FAILED), StatusKind::Error),
        }
    }

    /// Settle an unregister. Returns the status sequence number to schedule a
    /// hide for.
    pub fn finish_unregister(&mut self, result: &Result<String, ApiError>) -> u64 {
        match result {
            Ok(message) => self.status.show(message.clone(), StatusKind::Success),
            Err(err) => self
                .status
                .show(err.rejection_message().unwrap_or(UNREGISTER_FAILED), StatusKind::Error),
        }
    }
}
