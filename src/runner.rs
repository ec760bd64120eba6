//! This module represents a run of a program as a series of consecutive
//! execution steps over a fresh circular tape. The run is deterministic;
//! it halts when the instruction pointer walks off the end of the program,
//! and faults on the first unmatched loop delimiter it encounters.
//!
//! Programs produced by the encoders are loop-free and terminate in one
//! pass. A hand-written program with loops may run forever when its halting
//! condition is never met; callers wanting a bound can request one with
//! [`Machine::with_step_limit`].

use crate::{
    alphabet::{self, Symbol},
    error::ProgramError,
    instruction::{Instruction, Program},
    tape::Tape,
};
use std::collections::HashMap;

/// Resolved loop delimiter pairs of one run. Pairs are resolved lazily on
/// first encounter and memoized in both directions; the registry is owned
/// by its [Machine] and discarded with it.
#[derive(Debug, Default)]
struct JumpRegistry {
    /// loop start position to its matching loop end
    forward: HashMap<usize, usize>,
    /// loop end position to its matching loop start
    backward: HashMap<usize, usize>,
}

impl JumpRegistry {
    fn record(&mut self, start: usize, end: usize) {
        self.forward.insert(start, end);
        self.backward.insert(end, start);
    }
}

/// The virtual machine: a program under execution against a tape, an
/// instruction pointer and the committed output
pub struct Machine<'a> {
    program: &'a Program,
    tape: Tape,
    ip: usize,
    output: Vec<Symbol>,
    jumps: JumpRegistry,
    step_limit: Option<u64>,
}

impl<'a> Machine<'a> {
    /// Creates a machine over a fresh all-blank tape, without a step bound
    pub fn new(program: &'a Program) -> Machine<'a> {
        Machine {
            program,
            tape: Tape::new(),
            ip: 0,
            output: Vec::new(),
            jumps: JumpRegistry::default(),
            step_limit: None,
        }
    }

    /// Creates a machine that faults with [ProgramError::StepLimitExceeded]
    /// once `limit` instructions have executed
    pub fn with_step_limit(program: &'a Program, limit: u64) -> Machine<'a> {
        Machine {
            step_limit: Some(limit),
            ..Machine::new(program)
        }
    }

    /// Runs the program to completion and returns the committed output
    /// decoded as text
    pub fn run(mut self) -> Result<String, ProgramError> {
        let mut steps: u64 = 0;
        while self.ip < self.program.len() {
            if let Some(limit) = self.step_limit {
                if steps == limit {
                    return Err(ProgramError::StepLimitExceeded { limit });
                }
            }
            self.step()?;
            steps += 1;
        }
        Ok(alphabet::decode(&self.output))
    }

    /// Executes the instruction under the instruction pointer
    fn step(&mut self) -> Result<(), ProgramError> {
        match self.program.instructions()[self.ip] {
            Instruction::MoveLeft => self.tape.move_left(),
            Instruction::MoveRight => self.tape.move_right(),
            Instruction::Increment => {
                let next = self.tape.read().next();
                self.tape.write(next);
            }
            Instruction::Decrement => {
                let prev = self.tape.read().prev();
                self.tape.write(prev);
            }
            Instruction::Commit => self.output.push(self.tape.read()),
            Instruction::LoopStart => {
                let end = self.resolve_forward(self.ip)?;
                if self.tape.read().is_blank() {
                    // skip the body entirely
                    self.ip = end + 1;
                    return Ok(());
                }
            }
            Instruction::LoopEnd => {
                let start = self.resolve_backward(self.ip)?;
                if !self.tape.read().is_blank() {
                    // repeat the body
                    self.ip = start + 1;
                    return Ok(());
                }
            }
        }
        self.ip += 1;
        Ok(())
    }

    /// Finds the loop end matching the loop start at `position` by a
    /// balanced forward scan, memoizing the pair
    fn resolve_forward(&mut self, position: usize) -> Result<usize, ProgramError> {
        if let Some(&end) = self.jumps.forward.get(&position) {
            return Ok(end);
        }
        let mut depth = 0usize;
        for (pos, &instr) in self
            .program
            .instructions()
            .iter()
            .enumerate()
            .skip(position + 1)
        {
            match instr {
                Instruction::LoopStart => depth += 1,
                Instruction::LoopEnd if depth == 0 => {
                    self.jumps.record(position, pos);
                    return Ok(pos);
                }
                Instruction::LoopEnd => depth -= 1,
                _ => (),
            }
        }
        Err(ProgramError::UnmatchedLoopStart { position })
    }

    /// Finds the loop start matching the loop end at `position` by a
    /// balanced backward scan, memoizing the pair
    fn resolve_backward(&mut self, position: usize) -> Result<usize, ProgramError> {
        if let Some(&start) = self.jumps.backward.get(&position) {
            return Ok(start);
        }
        let mut depth = 0usize;
        for pos in (0..position).rev() {
            match self.program.instructions()[pos] {
                Instruction::LoopEnd => depth += 1,
                Instruction::LoopStart if depth == 0 => {
                    self.jumps.record(pos, position);
                    return Ok(pos);
                }
                Instruction::LoopStart => depth -= 1,
                _ => (),
            }
        }
        Err(ProgramError::UnmatchedLoopEnd { position })
    }
}

/// Parses program text and runs it on a fresh tape, returning the decoded
/// output
pub fn execute(text: &str) -> Result<String, ProgramError> {
    let program: Program = text.parse()?;
    Machine::new(&program).run()
}
