//! Drinkdraw Game Engine
//!
//! Platform-agnostic session logic for the Drinkdraw party game: setup, participant
//! entry, the shuffle-and-assign draw and post-draw edits. No UI or browser
//! dependencies; shells plug in a [`SessionStorage`] and a random source.

pub mod assign;
pub mod bars;
pub mod config;
pub mod constants;
pub mod edit;
pub mod entry;
pub mod error;
pub mod participant;
pub mod screen;
pub mod session;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use assign::{DrawOutcome, draw, draw_session, fisher_yates, pool_drinks};
pub use bars::{Bar, BarCatalog, BarTheme};
pub use config::Config;
pub use edit::{EditBuffer, add_participant, edit_drinks};
pub use entry::{EntryProgress, save_participant, submit_participant};
pub use error::{ConsistencyViolation, ValidationError, ValidationErrors};
pub use participant::{Participant, ParticipantDraft, normalize_drinks};
pub use screen::{Screen, resolve};
pub use session::{Action, Effect, SessionEngine, Transition, reduce};
pub use state::SessionState;
pub use storage::{
    MemoryStorage, NullStorage, SessionStorage, StorageError, decode_session, encode_session,
};
