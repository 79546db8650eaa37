//! Session context and hooks for the UI.

use dioxus::prelude::*;
use session::{Session, SessionStore};

/// Build the session store for the current platform: browser localStorage on
/// web, an in-process map everywhere else (tests, server-side rendering).
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_store() -> impl SessionStore + Clone {
    session::LocalStorage::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_store() -> impl SessionStore + Clone {
    session::MemoryStore::new()
}

/// Handle over the current session, shared through context. All reads and
/// writes of the token pair go through here so storage and signal state never
/// drift apart.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: Signal<Option<Session>>,
}

impl SessionHandle {
    pub fn current(&self) -> Option<Session> {
        (self.state)()
    }

    pub fn access_token(&self) -> Option<String> {
        self.current().map(|s| s.access_token)
    }

    /// Persist a fresh session (after login) and publish it to subscribers.
    pub fn establish(&mut self, session: Session) {
        session.save(&make_store());
        self.state.set(Some(session));
    }

    /// Drop the session everywhere. Called on logout and on any 401.
    pub fn clear(&mut self) {
        Session::clear(&make_store());
        self.state.set(None);
    }
}

/// Get the session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that loads the persisted session once and shares it.
/// Wrap the app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| Session::load(&make_store()));
    use_context_provider(|| SessionHandle { state });

    rsx! {
        {children}
    }
}
