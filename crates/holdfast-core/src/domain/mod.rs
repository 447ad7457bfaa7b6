//! Domain model (target, context, outcomes, lease state, notices, errors).

pub mod context;
pub mod errors;
pub mod notice;
pub mod outcome;
pub mod state;
pub mod target;

pub use self::context::ActionContext;
pub use self::errors::KeeperError;
pub use self::notice::{Notice, NoticeBody, NoticeLevel};
pub use self::outcome::{RejectReason, RenewalFailure, RenewalOutcome};
pub use self::state::{HaltReason, KeeperPhase, LeaseState, LeaseStatus};
pub use self::target::LeaseTarget;
