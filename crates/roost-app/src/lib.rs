//! Application layer for Roost
//!
//! Pure state machines and a generic runtime for the authentication flow,
//! enabling deterministic testing with the same code that runs behind the
//! terminal front-end.
//!
//! # Components
//!
//! - [`OtpFlow`]: OTP entry state machine (cells, focus, submission)
//! - [`Navigator`]: Screen stack and post-verification routing
//! - [`Verifier`]: Trait for the code delivery/verification collaborator
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver and Verifier

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod code;
mod config;
mod driver;
mod error;
mod event;
mod flow;
mod input;
pub mod mask;
mod router;
mod runtime;
mod state;
mod verifier;

pub use action::FlowAction;
pub use code::{Code, CompleteCode};
pub use config::{DEFAULT_CODE_LENGTH, FlowConfig, MAX_CODE_LENGTH};
pub use driver::Driver;
pub use error::{ConfigError, IncompleteError};
pub use event::FlowEvent;
pub use flow::OtpFlow;
pub use input::KeyInput;
pub use mask::{MaskedDisplay, VerificationKind, VerificationTarget, compute_masked_display};
pub use router::{Navigator, Screen};
pub use runtime::{FlowOutcome, Runtime};
pub use state::{CellState, FlowPhase};
pub use verifier::{FixedCodeVerifier, Verifier};
