use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pretzel",
    version = "0.1",
    about = "pretzel - an interpreter and shortest-program encoder for a circular-tape instruction set"
)]
pub enum Commands {
    /// Synthesize the shortest program reproducing a phrase
    Encode(EncodeArgs),
    /// Execute a program and print its decoded output
    Run(RunArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct EncodeArgs {
    #[arg(
        value_name = "PHRASE",
        help = "target phrase over space and A-Z; read from standard input when omitted"
    )]
    pub phrase: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[arg(
        value_name = "PROGRAM",
        help = "program text over <>+-.[]; read from standard input when omitted"
    )]
    pub program: Option<String>,

    #[arg(
        long,
        value_name = "N",
        help = "abort execution after N steps (looping programs may otherwise run forever)"
    )]
    pub max_steps: Option<u64>,
}
