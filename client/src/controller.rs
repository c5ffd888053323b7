//! Central controller for generation requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `GenerationController` is built in `App` and provided through Leptos
//! context; components reach it with `expect_context` instead of a global.
//! It owns the request-list and refresh signals, forwards user actions to the
//! service, and redraws the list when the service answers.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser's single UI thread. Service calls are
//! spawned with `spawn_local`; the only timer is the chained auto-refresh
//! delay tracked by `RefreshState`. An in-flight call is never aborted.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::api::{RequestAction, ServiceError};
use crate::net::types::{GenerationRequest, ImageSpec};
use crate::state::auth::AuthState;
use crate::state::refresh::RefreshState;
#[cfg(feature = "hydrate")]
use crate::state::refresh::RefreshTicket;
use crate::state::requests::RequestsState;

/// Handle to the shared request signals. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct GenerationController {
    requests: RwSignal<RequestsState>,
    refresh: RwSignal<RefreshState>,
    auth: RwSignal<AuthState>,
}

impl GenerationController {
    #[must_use]
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self { requests: RwSignal::new(RequestsState::default()), refresh: RwSignal::new(RefreshState::default()), auth }
    }

    /// Request-list signal for rendering.
    #[must_use]
    pub fn requests(self) -> RwSignal<RequestsState> {
        self.requests
    }

    #[must_use]
    pub fn auth(self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Tracked read of the auto-refresh flag.
    #[must_use]
    pub fn auto_refresh(self) -> bool {
        self.refresh.with(|r| r.auto_refresh)
    }

    /// Initial load: restore the stored token, draw once, arm the timer if
    /// auto-refresh is on, and refresh again whenever the token changes.
    ///
    /// The stored token is read in an effect, i.e. after hydration, so the
    /// first browser render matches the signed-out server render.
    pub fn start(self) {
        #[cfg(feature = "hydrate")]
        Effect::new(move || {
            self.auth.set(AuthState::from_raw(crate::util::auth::load_token().as_deref()));
            leptos::task::spawn_local(self.timed_refresh());
        });

        crate::util::auth::listen(self.auth, Callback::new(move |()| self.refresh()));
    }

    /// Submit a new request, then redraw the list.
    pub fn create(self, spec: ImageSpec) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = self.token();
            let spec = crate::net::types::GenerationSpec::from_image(spec);
            match crate::net::api::create_request(&spec, token.as_deref()).await {
                Ok(created) => {
                    log::info!("created generation request {}", created.id);
                    self.fetch_and_draw().await;
                }
                Err(e) => self.report("create", &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = spec;
        }
    }

    /// Fetch the current list and redraw.
    pub fn refresh(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(self.fetch_and_draw());
    }

    pub fn cancel(self, request: &GenerationRequest) {
        self.run_action(RequestAction::Cancel, request.id);
    }

    pub fn retry(self, request: &GenerationRequest) {
        self.run_action(RequestAction::Retry, request.id);
    }

    pub fn delete(self, request: &GenerationRequest) {
        self.run_action(RequestAction::Delete, request.id);
    }

    pub fn publish(self, request: &GenerationRequest) {
        self.run_action(RequestAction::Publish, request.id);
    }

    pub fn unpublish(self, request: &GenerationRequest) {
        self.run_action(RequestAction::Unpublish, request.id);
    }

    /// Forward a lifecycle action to the service, then refresh.
    pub fn run_action(self, action: RequestAction, id: i64) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = self.token();
            match crate::net::api::perform(action, id, token.as_deref()).await {
                Ok(()) => self.fetch_and_draw().await,
                Err(e) => self.report(action.label(), &e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, id);
        }
    }

    /// Arm or disarm periodic refresh. Disarming does not abort a refresh
    /// that is already running.
    pub fn set_auto_refresh(self, enabled: bool) {
        let ticket = self.refresh.try_update(|r| r.set_auto_refresh(enabled)).flatten();
        #[cfg(feature = "hydrate")]
        {
            if let Some(ticket) = ticket {
                self.schedule(ticket);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }

    /// Replace the rendered list.
    pub fn draw(self, items: Vec<GenerationRequest>) {
        self.requests.update(|s| s.draw(items));
    }

    pub fn set_expanded(self, id: i64, expanded: bool) {
        self.requests.update(|s| s.set_expanded(id, expanded));
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn report(self, operation: &str, error: &ServiceError) {
        let message = format!("{operation} failed: {error}");
        #[cfg(feature = "hydrate")]
        log::warn!("{message}");
        self.requests.update(|s| s.fail(message));
    }

    #[cfg(feature = "hydrate")]
    fn token(self) -> Option<String> {
        self.auth.with_untracked(|a| a.token.clone())
    }

    #[cfg(feature = "hydrate")]
    async fn fetch_and_draw(self) {
        let token = self.token();
        self.requests.update(RequestsState::begin_fetch);
        match crate::net::api::list_requests(token.as_deref()).await {
            Ok(items) => self.draw(items),
            Err(e) => {
                self.requests.update(RequestsState::finish_fetch);
                self.report("refresh", &e);
            }
        }
    }

    /// Refresh, then chain the next timer if auto-refresh is still on.
    #[cfg(feature = "hydrate")]
    async fn timed_refresh(self) {
        self.fetch_and_draw().await;
        if let Some(ticket) = self.refresh.try_update(RefreshState::rearm_after_refresh).flatten() {
            self.schedule(ticket);
        }
    }

    #[cfg(feature = "hydrate")]
    fn schedule(self, ticket: RefreshTicket) {
        let interval = self.refresh.with_untracked(|r| r.interval);
        log::debug!("next refresh in {}ms", interval.as_millis());
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(interval).await;
            if self.refresh.try_update(|r| r.fire(ticket)).unwrap_or(false) {
                self.timed_refresh().await;
            }
        });
    }
}
