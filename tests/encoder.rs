use pretzel::{
    encoder::{self, encode, encode_memory, encode_static},
    error::EncodeError,
    runner::Machine,
};

const PHRASES: [&str; 7] = [
    "",
    "AZ",
    "MINAS",
    "SPEAK FRIEND AND ENTER",
    "THE RING HAS AWOKEN",
    "ONE RING TO RULE THEM ALL AND IN THE DARKNESS BIND THEM",
    " ABCDEFGHIJKLMNOPQRSTUVWXYZ",
];

#[test]
fn test_round_trip_law() {
    for phrase in PHRASES {
        let program = encode(phrase).unwrap();
        let produced = Machine::new(&program).run().unwrap();
        assert_eq!(produced, phrase);
    }
}

#[test]
fn test_each_strategy_round_trips() {
    for phrase in PHRASES {
        for program in [encode_static(phrase).unwrap(), encode_memory(phrase).unwrap()] {
            assert_eq!(Machine::new(&program).run().unwrap(), phrase);
        }
    }
}

#[test]
fn test_selection_never_beaten_by_static() {
    for phrase in PHRASES {
        let best = encode(phrase).unwrap();
        let static_program = encode_static(phrase).unwrap();
        assert!(best.len() <= static_program.len());
    }
}

#[test]
fn test_no_repeats_strategies_tie() {
    // every letter of MINAS occurs once, so memory reuse finds nothing to
    // come back to and both strategies emit the same work
    for phrase in ["AZ", "MINAS"] {
        assert_eq!(
            encode_static(phrase).unwrap().len(),
            encode_memory(phrase).unwrap().len()
        );
    }
}

#[test]
fn test_long_repeats_favor_memory_reuse() {
    // A and Z both occur 15 times; the reuse strategy parks them on two
    // adjacent cells and shuttles between them
    let phrase = "AZ".repeat(15);
    let static_program = encode_static(&phrase).unwrap();
    let memory_program = encode_memory(&phrase).unwrap();
    assert!(memory_program.len() < static_program.len());
    assert_eq!(Machine::new(&memory_program).run().unwrap(), phrase);
}

#[test]
fn test_consecutive_repeats_commit_for_free() {
    let program = encoder::encode("AAAAAAAAAA").unwrap();
    // one increment, then one commit per character
    assert_eq!(program.len(), 11);
}

#[test]
fn test_rejects_foreign_characters() {
    for (phrase, character, position) in
        [("MORDOR!", '!', 6), ("lower", 'l', 0), ("A Z?", '?', 3)]
    {
        assert_eq!(
            encode(phrase).unwrap_err(),
            EncodeError::TargetAlphabetViolation {
                character,
                position
            }
        );
    }
}

#[test]
fn test_blank_heavy_phrase() {
    let phrase = " A A A ";
    let program = encode(phrase).unwrap();
    assert_eq!(Machine::new(&program).run().unwrap(), phrase);
}
