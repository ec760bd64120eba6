//! This module synthesizes loop-free programs reproducing a target phrase.
//! Two strategies run over the same phrase: a static one that rewrites a
//! single cell for every character, and a memory-reuse one that keeps a
//! dry-run of the whole tape and may navigate back to a cell already
//! holding the needed symbol. The selector keeps the shorter program and
//! proves it by executing it on the machine before handing it out.
//!
//! Neither strategy emits loop instructions. Run-length loop emission for
//! long repeated-increment runs would shorten some programs further; the
//! instruction set supports it but no strategy exploits it yet.

use crate::{
    alphabet::Symbol,
    error::EncodeError,
    instruction::{Instruction, Program},
    runner::Machine,
    tape::Tape,
};
use itertools::Itertools;
use log::{debug, info};
use std::collections::HashSet;

/// Maps the target phrase to symbols, rejecting it on the first character
/// outside the alphabet
fn parse_target(target: &str) -> Result<Vec<Symbol>, EncodeError> {
    target
        .chars()
        .enumerate()
        .map(|(position, character)| {
            Symbol::from_char(character).ok_or(EncodeError::TargetAlphabetViolation {
                character,
                position,
            })
        })
        .collect()
}

/// Non-blank symbols occurring more than once in the target. The
/// memory-reuse strategy avoids overwriting cells holding these, since a
/// later character may come back for them.
fn repeated_symbols(symbols: &[Symbol]) -> HashSet<Symbol> {
    symbols
        .iter()
        .copied()
        .counts()
        .into_iter()
        .filter(|&(symbol, count)| count > 1 && !symbol.is_blank())
        .map(|(symbol, _)| symbol)
        .collect()
}

/// Synthesizes a program that never moves the cursor: every character is
/// produced by rewriting the one cell under it and committing
pub fn encode_static(target: &str) -> Result<Program, EncodeError> {
    let symbols = parse_target(target)?;
    let mut program = Program::new();
    let mut cell = Symbol::BLANK;
    for symbol in symbols {
        program.extend(Instruction::Increment.repeat(cell.distance(symbol)));
        program.push(Instruction::Commit);
        cell = symbol;
    }
    Ok(program)
}

/// Synthesizes a program that tracks the full tape and, per character,
/// keeps the cheaper of editing a cell in place and walking to an
/// occurrence the tape already holds. The local tape and cursor mirror the
/// machine's semantics exactly, so every decision sees the state the
/// emitted program will produce.
pub fn encode_memory(target: &str) -> Result<Program, EncodeError> {
    let symbols = parse_target(target)?;
    let repeated = repeated_symbols(&symbols);
    let mut tape = Tape::new();
    let mut program = Program::new();

    for (i, &symbol) in symbols.iter().enumerate() {
        if tape.read() == symbol {
            program.push(Instruction::Commit);
            continue;
        }

        // In-place candidate. When the cell under the cursor and the wanted
        // symbol are both repeated in the target, editing here would destroy
        // a cell a later character may want back, so the edit shifts one
        // cell to the right instead.
        let shift = i > 0 && repeated.contains(&tape.read()) && repeated.contains(&symbol);
        let mut local = Vec::new();
        if shift {
            let right_cell = tape.read_at(tape.cursor() + 1);
            local.push(Instruction::MoveRight);
            local.extend(Instruction::Increment.repeat(right_cell.distance(symbol)));
        } else {
            local.extend(Instruction::Increment.repeat(tape.read().distance(symbol)));
        }
        local.push(Instruction::Commit);

        // Relocate candidate: walk the shortest cyclic path to the nearest
        // occurrence, when the tape holds one at all.
        let relocate = tape.find_nearest(symbol).map(|pos| {
            let mut moves = Instruction::MoveRight.repeat(tape.offset_to(pos));
            moves.push(Instruction::Commit);
            (pos, moves)
        });

        match relocate {
            Some((pos, moves)) if moves.len() < local.len() => {
                tape.jump_to(pos);
                program.extend(moves);
            }
            _ => {
                if shift {
                    tape.move_right();
                }
                tape.write(symbol);
                program.extend(local);
            }
        }
    }
    Ok(program)
}

/// Runs both strategies, keeps the program with the fewest instructions
/// (a tie keeps the static one) and verifies it by round-tripping through
/// the machine. A verification mismatch means a strategy is buggy and is
/// surfaced as a hard error, never returned as a program.
pub fn encode(target: &str) -> Result<Program, EncodeError> {
    let static_program = encode_static(target)?;
    let memory_program = encode_memory(target)?;
    debug!("static strategy: {} instructions", static_program.len());
    debug!("memory strategy: {} instructions", memory_program.len());

    let (strategy, program) = if memory_program.len() < static_program.len() {
        ("memory", memory_program)
    } else {
        ("static", static_program)
    };
    info!("chose {strategy} strategy ({} instructions)", program.len());

    let produced = Machine::new(&program).run()?;
    if produced != target {
        return Err(EncodeError::VerificationMismatch {
            expected: target.to_string(),
            produced,
        });
    }
    Ok(program)
}
