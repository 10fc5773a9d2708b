use dioxus::prelude::*;
use shared_types::{Session, ROLE_KEY, TOKEN_KEY};

/// Global session state, provided as context from `App`.
///
/// Holds the most recent local-storage snapshot. `None` means the first
/// read has not happened yet; the shell shows a loading placeholder until
/// it has.
#[derive(Clone, Copy)]
pub struct SessionState {
    current: Signal<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
        }
    }

    /// True until the first storage read has completed.
    pub fn is_loading(&self) -> bool {
        self.current.read().is_none()
    }

    /// The latest snapshot; empty session while still loading.
    pub fn snapshot(&self) -> Session {
        self.current.read().clone().unwrap_or_default()
    }

    /// Re-read token and role from local storage.
    pub fn refresh(&mut self) {
        self.current.set(Some(read_session()));
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Read the session from browser local storage.
///
/// The values are written by the external Activus login flow; this
/// application never writes them. Outside a browser both keys read as
/// absent.
pub fn read_session() -> Session {
    Session::new(storage_item(TOKEN_KEY), storage_item(ROLE_KEY))
}

fn storage_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}
