//! Transfer execution state machine
//!
//! Drives a transaction through the fixed step sequence a route implies:
//!
//! ```text
//! init -> on-ramp -> [escrow] -> bridge -> off-ramp -> complete
//! ```
//!
//! # State Machine
//!
//! ```text
//! NOT_STARTED -> RUNNING -> COMPLETED
//!                   |
//!                FAILED  (bridge fault only; retry restarts from step 0)
//! ```
//!
//! # Invariants
//!
//! 1. Steps are strictly sequential: the next step timer is armed only after
//!    the previous one fired.
//! 2. The bridge step is the only fault point (fixed 5% probability).
//! 3. A retry replaces the outstanding step timer, so a stale timer can never
//!    advance a restarted run.
//! 4. Finalization happens at most once, from the COMPLETED state.

pub mod error;
pub mod executor;
pub mod session;
pub mod state;
pub mod step;

pub use error::TransferError;
pub use executor::{TransferExecutor, TransferProgress};
pub use session::{StepTiming, TransferSession};
pub use state::RunState;
pub use step::TransferStep;
