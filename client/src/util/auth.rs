//! Browser-side token persistence and change subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in `localStorage` so it survives reloads. Components read
//! presence from the `AuthState` signal; `listen` lets the controller react
//! when the token changes in this tab or another one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "vc_auth_token";

/// Read the stored token. Always `None` outside the browser.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist (or clear) the token. Best-effort; storage errors are ignored.
pub fn store_token(token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = match token {
            Some(token) => storage.set_item(STORAGE_KEY, token),
            None => storage.remove_item(STORAGE_KEY),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Replace the session token and persist it.
pub fn set_token(auth: RwSignal<AuthState>, raw: Option<&str>) {
    let next = AuthState::from_raw(raw);
    store_token(next.token.as_deref());
    auth.set(next);
}

/// Run `on_change` whenever the token changes after the initial load.
///
/// Changes made in other tabs arrive as `storage` events and are folded into
/// `auth` first, so the callback fires for those as well.
pub fn listen(auth: RwSignal<AuthState>, on_change: Callback<()>) {
    #[cfg(feature = "hydrate")]
    {
        let _handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            if ev.key().as_deref() == Some(STORAGE_KEY) {
                auth.set(AuthState::from_raw(ev.new_value().as_deref()));
            }
        });
    }

    Effect::new(move |prev: Option<Option<String>>| {
        let token = auth.with(|a| a.token.clone());
        if token_changed(prev.as_ref(), &token) {
            on_change.run(());
        }
        token
    });
}

/// Whether a token observation is a change worth reporting. `prev` is `None`
/// on the first observation, which only records the starting value.
fn token_changed(prev: Option<&Option<String>>, current: &Option<String>) -> bool {
    prev.is_some_and(|prev| prev != current)
}
