//! Persistent store abstraction for the one session blob.
use crate::constants::SESSION_STORAGE_KEY;
use crate::state::SessionState;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

/// Trait for abstracting load/save/clear of the serialized session.
/// Platform-specific implementations should provide this.
pub trait SessionStorage {
    type Error: std::error::Error + 'static;

    /// Load the saved session, `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the blob cannot be decoded.
    fn load(&self) -> Result<Option<SessionState>, Self::Error>;

    /// Replace the stored session wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&self, state: &SessionState) -> Result<(), Self::Error>;

    /// Forget the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the delete.
    fn clear(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session blob could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("session could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_session(state: &SessionState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(StorageError::Encode)
}

/// # Errors
///
/// Returns an error if the blob is not a valid session.
pub fn decode_session(blob: &str) -> Result<SessionState, StorageError> {
    serde_json::from_str(blob).map_err(StorageError::Decode)
}

/// In-memory store holding the encoded blob under [`SESSION_STORAGE_KEY`].
///
/// Clones share the same slot, so a test can keep a handle after moving one into an engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<(String, String)>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob as it would sit in the browser store.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().as_ref().map(|(_, blob)| blob.clone())
    }

    /// Overwrite the raw blob, e.g. to simulate a corrupt save.
    pub fn put_raw(&self, blob: impl Into<String>) {
        *self.slot.borrow_mut() = Some((SESSION_STORAGE_KEY.to_string(), blob.into()));
    }
}

impl SessionStorage for MemoryStorage {
    type Error = StorageError;

    fn load(&self) -> Result<Option<SessionState>, Self::Error> {
        self.slot
            .borrow()
            .as_ref()
            .filter(|(key, _)| key == SESSION_STORAGE_KEY)
            .map(|(_, blob)| decode_session(blob))
            .transpose()
    }

    fn save(&self, state: &SessionState) -> Result<(), Self::Error> {
        let blob = encode_session(state)?;
        self.put_raw(blob);
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

/// Store that keeps nothing; for shells that opt out of persistence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl SessionStorage for NullStorage {
    type Error = Infallible;

    fn load(&self) -> Result<Option<SessionState>, Self::Error> {
        Ok(None)
    }

    fn save(&self, _state: &SessionState) -> Result<(), Self::Error> {
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
