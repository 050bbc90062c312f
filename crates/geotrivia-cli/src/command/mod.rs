use clap::{Parser, Subcommand};

use self::{catalog::CatalogArg, replay::ReplayArg};

mod catalog;
mod replay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a whole game from a file of recorded guesses
    Replay(#[clap(flatten)] ReplayArg),
    /// List the questions a catalog file yields
    Catalog(#[clap(flatten)] CatalogArg),
}

pub async fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Replay(arg) => replay::run(&arg).await?,
        Mode::Catalog(arg) => catalog::run(&arg).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let args = CommandArgs::try_parse_from([
            "geotrivia",
            "replay",
            "capitals.geojson",
            "--guesses",
            "guesses.json",
            "--difficulty",
            "hard",
        ])
        .unwrap();
        assert!(matches!(args.mode, Mode::Replay(_)));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        let result = CommandArgs::try_parse_from([
            "geotrivia",
            "replay",
            "capitals.geojson",
            "--guesses",
            "guesses.json",
            "--difficulty",
            "impossible",
        ]);
        assert!(result.is_err());
    }
}
