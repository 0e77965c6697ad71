//! Browsing-session concerns: the session-scoped storage region and the
//! page gate.
//!
//! The storage region models a persistence area whose lifetime is tied to the
//! browsing session - empty when the session starts, cleared on logout or
//! session end. Both the login flag and the persisted cart live in it.

pub mod gate;
pub mod storage;

pub use gate::{gate, GateOutcome, Page, Session};
pub use storage::{MemorySessionStorage, SessionStorage, StorageError};
