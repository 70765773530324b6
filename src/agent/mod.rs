//! Game orchestration: sessions, outcomes, and batch simulation

pub mod batch;
pub mod outcome;
pub mod session;

pub use batch::{run_batch, summarize, BatchSummary};
pub use outcome::{GameOutcome, GameResult, MoveKind, MoveRecord, OutcomeSummary};
pub use session::GameSession;
