use clap::Parser;
use seqfind::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{motif, population},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Motif(_) => "motif",
        Command::Population(_) => "population",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Motif(args) => motif::motif(args)?,
        Command::Population(args) => population::population(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
