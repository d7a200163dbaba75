// src/exit.rs
//! Standardized process exit codes for `casetally`.
//!
//! Provides a stable contract for the scheduler scripts that invoke us.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum TallyExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input bundle could not be read as a ledger.
    InvalidInput = 2,
    /// Verification reported error findings.
    CheckFailed = 6,
}

impl TallyExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for TallyExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
