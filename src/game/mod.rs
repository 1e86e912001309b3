//! Game engine: progress state, word judging, the hint economy, persistence
//! and the session controller that ties them to pointer input.

pub mod hints;
mod judge;
mod session;
mod state;
mod store;

pub use hints::{HintMeter, HintOutcome, MISTAKES_PER_HINT};
pub use judge::{Verdict, classify};
pub use session::{
    ClearToken, Deferred, DeferredTask, DragId, HOLD, MessageKind, RenderSnapshot,
    SessionController, StatusMessage,
};
pub use state::{FoundConnection, GameState, PersistedState};
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError, decode, encode};
