//! Severity-classified diagnostic reporting.
//!
//! This is the external boundary the core structures report fatal conditions
//! to: a violated precondition is classified, written to stderr and then
//! escalated to a panic. [`Info`](Severity::Info) and
//! [`Warning`](Severity::Warning) reports never terminate; they exist for
//! callers and for the few places where a structure guards a sharp edge (such
//! as a truncating resize) out loud instead of silently.
//!
//! The non-terminating alternative to the panicking code path is the `try_`
//! form of each operation, which returns the same classified condition as a
//! typed error and reports nothing.

use std::error::Error;
use std::fmt::Display;

/// The classification of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Severity {
    /// Informational, no action required.
    #[display("Info")]
    Info,
    /// Something surprising happened but the operation completed.
    #[display("Warning")]
    Warning,
    /// A contract was violated; the reporting call does not return normally.
    #[display("Error")]
    Error,
}

/// Writes a single severity-prefixed line to stderr.
pub fn report(severity: Severity, message: impl Display) {
    eprintln!("{severity}: {message}");
}

/// Reports `error` at [`Severity::Error`] and panics with the same message.
pub(crate) fn fail(error: &dyn Error) -> ! {
    report(Severity::Error, error);
    panic!("{}", error)
}
