//! Activity panel controller: drives loads, signups, and unregisters against
//! the activities API and applies the outcomes to panel state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on the browser's single-threaded event loop. Every state change is a
//! short synchronous closure applied through [`PanelStore`]; no state borrow
//! is held across an `.await`, so overlapping operations interleave safely.
//!
//! ERROR HANDLING
//! ==============
//! Failures stop at this boundary. They are logged and turned into a status
//! message or region placeholder; none are returned to the caller.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{RwSignal, Update};

use crate::config::PanelConfig;
use crate::net::api::ActivitiesApi;
use crate::state::panel::PanelState;

/// Somewhere panel state lives.
///
/// `modify` returns `None` when the state is gone (e.g. a disposed signal
/// after the panel unmounted); operations stop quietly in that case.
pub trait PanelStore: Clone + 'static {
    fn modify<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R>;
}

impl PanelStore for RwSignal<PanelState> {
    fn modify<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        Update::try_update(self, f)
    }
}

impl PanelStore for Rc<RefCell<PanelState>> {
    fn modify<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs a callback once after a delay.
pub trait HideScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Browser scheduler backed by `setTimeout`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "csr")]
impl HideScheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

#[derive(Clone, Debug)]
pub struct PanelController<A, S, H> {
    api: A,
    store: S,
    scheduler: H,
    hide_delay: Duration,
}

impl<A, S, H> PanelController<A, S, H>
where
    A: ActivitiesApi,
    S: PanelStore,
    H: HideScheduler,
{
    pub fn new(api: A, store: S, scheduler: H, config: &PanelConfig) -> Self {
        Self {
            api,
            store,
            scheduler,
            hide_delay: config.status_hide_delay,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the full snapshot and rebuild every region from it.
    ///
    /// Only the most recently started load may render; an older response is
    /// dropped whether it succeeded or failed.
    pub async fn load_activities(&self) {
        let Some(seq) = self.store.modify(PanelState::begin_load) else {
            return;
        };

        let applied = match self.api.fetch_activities().await {
            Ok(snapshot) => self.store.modify(|state| state.apply_snapshot(seq, &snapshot)),
            Err(err) => {
                leptos::logging::error!("Error fetching activities: {err}");
                self.store.modify(|state| state.apply_load_failure(seq))
            }
        };

        if applied == Some(false) {
            leptos::logging::warn!("discarding activities response for superseded load {seq}");
        }
    }

    /// Register `email` for `activity`.
    ///
    /// Submit stays disabled while the request is in flight; a call made
    /// during that window is ignored. On success the form is cleared and the
    /// snapshot reloaded.
    pub async fn submit_signup(&self, activity: &str, email: &str) {
        match self.store.modify(PanelState::begin_signup) {
            Some(true) => {}
            Some(false) => {
                leptos::logging::warn!("signup already in flight; ignoring submit");
                return;
            }
            None => return,
        }

        let result = self.api.signup(activity, email).await;
        if let Err(err) = &result {
            leptos::logging::error!("Error signing up for {activity}: {err}");
        }

        let Some(status_seq) = self.store.modify(|state| state.finish_signup(&result)) else {
            return;
        };
        self.schedule_hide(status_seq);

        if result.is_ok() {
            self.load_activities().await;
        }
    }

    /// Remove `email` from `activity`, reloading the snapshot on success.
    pub async fn unregister_participant(&self, activity: &str, email: &str) {
        let result = self.api.unregister(activity, email).await;
        if let Err(err) = &result {
            leptos::logging::error!("Error unregistering from {activity}: {err}");
        }

        let Some(status_seq) = self.store.modify(|state| state.finish_unregister(&result)) else {
            return;
        };
        self.schedule_hide(status_seq);

        if result.is_ok() {
            self.load_activities().await;
        }
    }

    fn schedule_hide(&self, status_seq: u64) {
        let store = self.store.clone();
        self.scheduler.schedule(
            self.hide_delay,
            Box::new(move || {
                store.modify(|state| state.status.hide(status_seq));
            }),
        );
    }
}
