//! Command line interface definition.

use clap::Parser;

/// Two-player tic-tac-toe at the terminal.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe played at the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Keep previous frames on screen instead of clearing between turns.
    #[arg(long)]
    pub no_clear: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_clearing_the_screen() {
        let cli = Cli::parse_from(["noughts"]);
        assert!(!cli.no_clear);
    }

    #[test]
    fn no_clear_flag_parses() {
        let cli = Cli::parse_from(["noughts", "--no-clear"]);
        assert!(cli.no_clear);
    }
}
