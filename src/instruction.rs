//! This module defines the closed seven-opcode instruction set and the
//! program type built from it. Programs serialize one character per
//! instruction with no whitespace, so program length and character count
//! coincide.

use crate::error::ProgramError;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum_macros::{EnumCount, EnumIter};

/// One opcode of the instruction set
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum Instruction {
    /// `<`: move the cursor one cell left, wrapping
    MoveLeft,
    /// `>`: move the cursor one cell right, wrapping
    MoveRight,
    /// `+`: advance the current cell to the next symbol, wrapping
    Increment,
    /// `-`: retreat the current cell to the previous symbol, wrapping
    Decrement,
    /// `.`: append the current cell's symbol to the output
    Commit,
    /// `[`: skip past the matching `]` when the current cell is blank
    LoopStart,
    /// `]`: jump back past the matching `[` when the current cell is non-blank
    LoopEnd,
}

impl Instruction {
    /// Returns the serialized character for the opcode
    pub fn to_char(self) -> char {
        match self {
            Instruction::MoveLeft => '<',
            Instruction::MoveRight => '>',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Commit => '.',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }

    /// Parses one serialized character, or `None` outside the 7-symbol set
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            '<' => Some(Instruction::MoveLeft),
            '>' => Some(Instruction::MoveRight),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Commit),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// The instruction undoing this one's effect on the tape and cursor.
    /// [Instruction::Commit] only touches the output and is its own inverse;
    /// the loop delimiters invert to each other.
    pub fn inverse(self) -> Instruction {
        match self {
            Instruction::MoveLeft => Instruction::MoveRight,
            Instruction::MoveRight => Instruction::MoveLeft,
            Instruction::Increment => Instruction::Decrement,
            Instruction::Decrement => Instruction::Increment,
            Instruction::Commit => Instruction::Commit,
            Instruction::LoopStart => Instruction::LoopEnd,
            Instruction::LoopEnd => Instruction::LoopStart,
        }
    }

    /// `n` copies of the instruction for positive `n`, `|n|` copies of its
    /// inverse for negative `n`, nothing for zero
    pub fn repeat(self, n: i32) -> Vec<Instruction> {
        let instr = if n < 0 { self.inverse() } else { self };
        vec![instr; n.unsigned_abs() as usize]
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.to_char())
    }
}

/// An ordered instruction sequence, the artifact the encoders synthesize
/// and the machine executes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program(Vec<Instruction>);

impl Program {
    /// Creates an empty program
    pub fn new() -> Program {
        Program(Vec::new())
    }

    /// Number of instructions, equal to the serialized character count
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the program contains no instructions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends one instruction
    pub fn push(&mut self, instr: Instruction) {
        self.0.push(instr);
    }

    /// Appends a sequence of instructions
    pub fn extend(&mut self, instrs: impl IntoIterator<Item = Instruction>) {
        self.0.extend(instrs);
    }

    /// Returns the instructions as a slice
    pub fn instructions(&self) -> &[Instruction] {
        &self.0
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instrs: Vec<Instruction>) -> Program {
        Program(instrs)
    }
}

impl FromStr for Program {
    type Err = ProgramError;

    /// Parses program text, rejecting the whole input on the first
    /// character outside the instruction set
    fn from_str(text: &str) -> Result<Program, ProgramError> {
        text.chars()
            .enumerate()
            .map(|(position, character)| {
                Instruction::from_char(character).ok_or(ProgramError::MalformedInstruction {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<Instruction>, ProgramError>>()
            .map(Program)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for instr in &self.0 {
            write!(f, "{instr}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_instruction_set_is_closed() {
        assert_eq!(Instruction::COUNT, 7);
        assert_eq!(Instruction::iter().count(), Instruction::COUNT);
    }

    #[test]
    fn test_char_round_trip() {
        for instr in Instruction::iter() {
            assert_eq!(Instruction::from_char(instr.to_char()), Some(instr));
        }
    }

    #[test]
    fn test_inverse_is_involutive() {
        for instr in Instruction::iter() {
            assert_eq!(instr.inverse().inverse(), instr);
        }
    }

    #[test]
    fn test_repeat() {
        for instr in Instruction::iter() {
            assert!(instr.repeat(0).is_empty());
            assert_eq!(instr.repeat(3), vec![instr; 3]);
            assert_eq!(instr.repeat(-2), vec![instr.inverse(); 2]);
        }
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        let err = "+>a.".parse::<Program>().unwrap_err();
        assert_eq!(
            err,
            ProgramError::MalformedInstruction {
                character: 'a',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_display_round_trip() {
        let text = "+>-[<.>-]";
        let program: Program = text.parse().unwrap();
        assert_eq!(program.len(), text.len());
        assert_eq!(program.to_string(), text);
    }
}
