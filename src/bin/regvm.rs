//! The CLI collaborator (spec §6.4): `-v` prints the version and exits 0,
//! `-h` prints usage and exits 0, no arguments launches the interactive
//! front end, and an unknown argument or more than one argument prints an
//! error and exits 1.
//!
//! The interactive front end itself (a GUI) is out of scope for this crate
//! (spec §1) — it is named here only as the collaborator this binary would
//! hand off to.

use clap::{CommandFactory, Parser};

/// A tiny parameterised register machine.
#[derive(Parser, Debug)]
#[command(name = "regvm", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print the version and exit.
    #[arg(short = 'v')]
    version: bool,

    /// Print usage and exit.
    #[arg(short = 'h')]
    help: bool,
}

fn main() {
    env_logger::init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    if raw_args.len() > 1 {
        eprintln!(
            "regvm: expected at most one argument, got {}",
            raw_args.len()
        );
        std::process::exit(1);
    }

    if raw_args.is_empty() {
        launch_interactive();
        return;
    }

    match Cli::try_parse_from(std::iter::once("regvm".to_string()).chain(raw_args.clone())) {
        Ok(cli) if cli.version => {
            println!("regvm {}", env!("CARGO_PKG_VERSION"));
        }
        Ok(cli) if cli.help => {
            Cli::command().print_help().ok();
            println!();
        }
        _ => {
            eprintln!("regvm: unrecognized argument '{}'", raw_args[0]);
            std::process::exit(1);
        }
    }
}

fn launch_interactive() {
    log::info!("no arguments given, handing off to the interactive front end");
    eprintln!(
        "regvm: this build does not bundle an interactive front end. \
         The GUI is an external collaborator over the `regvm` library crate's \
         Computer API (see SPEC_FULL.md); drive it directly or via \
         Computer::execute_stream for a text-mode session."
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_flag_parses() {
        let cli = Cli::try_parse_from(["regvm", "-v"]).unwrap();
        assert!(cli.version);
        assert!(!cli.help);
    }

    #[test]
    fn help_flag_parses() {
        let cli = Cli::try_parse_from(["regvm", "-h"]).unwrap();
        assert!(cli.help);
    }

    #[test]
    fn unknown_flag_fails_to_parse() {
        assert!(Cli::try_parse_from(["regvm", "--bogus"]).is_err());
    }
}
