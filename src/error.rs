//! This module implements the error types of the crate, split by surface:
//! [`ProgramError`] for parsing and executing program text, and
//! [`EncodeError`] for synthesizing programs from a target phrase.

use thiserror::Error;

/// Errors that can arise when parsing or executing a program
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("character '{character}' at position {position} is not an instruction")]
    MalformedInstruction { character: char, position: usize },

    #[error("loop start at position {position} has no matching loop end")]
    UnmatchedLoopStart { position: usize },

    #[error("loop end at position {position} has no matching loop start")]
    UnmatchedLoopEnd { position: usize },

    #[error("execution exceeded the requested limit of {limit} steps")]
    StepLimitExceeded { limit: u64 },
}

/// Errors that can arise when encoding a target phrase
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("character '{character}' at position {position} is outside the alphabet (space and A-Z)")]
    TargetAlphabetViolation { character: char, position: usize },

    #[error("encoder self-check failed: the chosen program decodes to {produced:?} instead of {expected:?}")]
    VerificationMismatch { expected: String, produced: String },

    #[error("the chosen program failed to execute: {0}")]
    BrokenProgram(#[from] ProgramError),
}
