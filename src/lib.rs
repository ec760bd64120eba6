//! This crate implements a miniature esoteric instruction set operating on
//! a circular tape of symbol cells, together with an encoder that, given a
//! target phrase, synthesizes the shortest program (by instruction count)
//! reproducing it.
//!
//! The seven instructions `< > + - . [ ]` move the cursor, rewrite the
//! cell under it within a cyclic 27-symbol alphabet (blank plus `A..=Z`),
//! commit the cell to the output, and delimit loops that continue while
//! the cell is non-blank. [`runner::Machine`] executes programs;
//! [`encoder::encode`] picks the shorter of two synthesis strategies and
//! verifies its choice by round-tripping through the machine.

pub mod alphabet;
pub mod cli;
pub mod encoder;
pub mod error;
pub mod instruction;
pub mod runner;
pub mod tape;

pub use alphabet::Symbol;
pub use error::{EncodeError, ProgramError};
pub use instruction::{Instruction, Program};
pub use runner::Machine;
pub use tape::Tape;
