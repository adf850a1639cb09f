//! Terminal UI for Roost
//!
//! A thin shell over [`roost_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`roost_app::Runtime`].
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use roost_app::{
    Driver, FixedCodeVerifier, FlowEvent, FlowOutcome, KeyInput, Navigator, OtpFlow, Runtime,
};
pub use terminal::{TerminalDriver, TerminalError};
