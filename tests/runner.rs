use pretzel::{
    error::ProgramError,
    instruction::Program,
    runner::{self, Machine},
};

#[test]
fn test_empty_program() {
    assert_eq!(runner::execute("").unwrap(), "");
}

#[test]
fn test_commit_blank() {
    assert_eq!(runner::execute(".").unwrap(), " ");
}

#[test]
fn test_az_by_rewrite() {
    // A, then two decrements wrapping through blank to Z
    assert_eq!(runner::execute("+.--.").unwrap(), "AZ");
}

#[test]
fn test_az_by_move() {
    // A on the first cell, Z one decrement below blank on the second
    assert_eq!(runner::execute("+.>-.").unwrap(), "AZ");
}

#[test]
fn test_loop_countdown() {
    // cell 1 holds Z, so the body runs 26 times committing cell 0's A
    assert_eq!(runner::execute("+>-[<.>-]").unwrap(), "A".repeat(26));
    assert_eq!(runner::execute("+>+++++[<.>-]").unwrap(), "AAAAA");
}

#[test]
fn test_loop_skipped_on_blank() {
    assert_eq!(runner::execute("[+++.]").unwrap(), "");
}

#[test]
fn test_nested_loops() {
    // the inner loop erases the cell, so both loops exit after one pass
    assert_eq!(runner::execute("+[[-]]").unwrap(), "");
}

#[test]
fn test_malformed_program() {
    assert_eq!(
        runner::execute("+>a.").unwrap_err(),
        ProgramError::MalformedInstruction {
            character: 'a',
            position: 2
        }
    );
}

#[test]
fn test_unmatched_loop_start() {
    assert_eq!(
        runner::execute("[+.").unwrap_err(),
        ProgramError::UnmatchedLoopStart { position: 0 }
    );
}

#[test]
fn test_unmatched_loop_end() {
    assert_eq!(
        runner::execute("+]").unwrap_err(),
        ProgramError::UnmatchedLoopEnd { position: 1 }
    );
    // faults on first encounter even when the cell is blank
    assert_eq!(
        runner::execute("]").unwrap_err(),
        ProgramError::UnmatchedLoopEnd { position: 0 }
    );
}

#[test]
fn test_step_limit_bounds_diverging_loop() {
    // the cell never reaches blank inside the body, so this loops forever
    let program: Program = "+[]".parse().unwrap();
    assert_eq!(
        Machine::with_step_limit(&program, 1000).run().unwrap_err(),
        ProgramError::StepLimitExceeded { limit: 1000 }
    );
}

#[test]
fn test_step_limit_leaves_halting_programs_alone() {
    let program: Program = "+>-[<.>-]".parse().unwrap();
    assert_eq!(
        Machine::with_step_limit(&program, 100_000).run().unwrap(),
        "A".repeat(26)
    );
}

#[test]
fn test_cursor_wraps_around_the_ring() {
    // 30 right moves return to the start cell
    let text = format!("+{}.", ">".repeat(30));
    assert_eq!(runner::execute(&text).unwrap(), "A");
}
