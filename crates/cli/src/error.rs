//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library errors to exit codes.
//!
//! Invariants:
//! - Exit code 5 is reserved for invalid configuration values.

use webtest_config::ConfigError;

/// Structured exit codes for webtest-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Validation error - a setting or argument has an invalid value.
    ///
    /// Scripts should fix the configuration and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError unless a ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<ConfigError>().is_some())
        {
            ExitCode::ValidationError
        } else {
            ExitCode::GeneralError
        }
    }
}
