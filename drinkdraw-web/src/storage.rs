//! localStorage-backed implementation of the core session store.
use drinkdraw_game::constants::SESSION_STORAGE_KEY;
use drinkdraw_game::{SessionState, SessionStorage, StorageError, decode_session, encode_session};

/// Web-specific session storage using localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] StorageError),
}

// Failures surface in the browser console; the engine keeps the game running.
fn reported<T>(result: Result<T, WebStorageError>) -> Result<T, WebStorageError> {
    if let Err(err) = &result {
        crate::dom::console_error(&format!("drinkdraw session store: {err}"));
    }
    result
}

fn backend() -> Result<web_sys::Storage, WebStorageError> {
    crate::dom::local_storage()
        .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))
}

fn load_session() -> Result<Option<SessionState>, WebStorageError> {
    let raw = backend()?
        .get_item(SESSION_STORAGE_KEY)
        .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))?;
    match raw {
        Some(blob) => Ok(Some(decode_session(&blob)?)),
        None => Ok(None),
    }
}

impl SessionStorage for LocalStorageSession {
    type Error = WebStorageError;

    fn load(&self) -> Result<Option<SessionState>, Self::Error> {
        reported(load_session())
    }

    fn save(&self, state: &SessionState) -> Result<(), Self::Error> {
        reported(encode_session(state).map_err(WebStorageError::from).and_then(|blob| {
            backend()?
                .set_item(SESSION_STORAGE_KEY, &blob)
                .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))
        }))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        reported(backend().and_then(|storage| {
            storage
                .remove_item(SESSION_STORAGE_KEY)
                .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))
        }))
    }
}
