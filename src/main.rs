use clap::Parser;
use msaviz::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{entropy, mutinfo},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Entropy(_) => "entropy",
        Command::Mutinfo(_) => "mutinfo",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Entropy(args) => entropy::entropy(args)?,
        Command::Mutinfo(args) => mutinfo::mutinfo(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
