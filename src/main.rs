//! Command line driver. Both subcommands take their input as an argument
//! or, when omitted, as one line on standard input. The chosen program or
//! decoded output is the only thing written to standard output; all
//! diagnostics go through the logger on standard error.

use clap::Parser;
use pretzel::{cli, encoder, instruction::Program, runner::Machine};
use std::{
    io::{self, BufRead},
    process::ExitCode,
};

/// Reads one line from standard input, without the trailing newline
fn read_line() -> Result<String, String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("could not read standard input: {e}"))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn encode_main(args: cli::EncodeArgs) -> Result<(), String> {
    let phrase = match args.phrase {
        Some(phrase) => phrase,
        None => read_line()?,
    };
    let program = encoder::encode(&phrase).map_err(|e| e.to_string())?;
    println!("{program}");
    Ok(())
}

fn run_main(args: cli::RunArgs) -> Result<(), String> {
    let text = match args.program {
        Some(text) => text,
        None => read_line()?,
    };
    let program: Program = text.parse().map_err(|e: pretzel::ProgramError| e.to_string())?;
    let machine = match args.max_steps {
        Some(limit) => Machine::with_step_limit(&program, limit),
        None => Machine::new(&program),
    };
    let output = machine.run().map_err(|e| e.to_string())?;
    println!("{output}");
    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Commands::parse();
    let result = match args {
        cli::Commands::Encode(args) => encode_main(args),
        cli::Commands::Run(args) => run_main(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
