use clap::Command;
use clap::arg;
use anyhow::Result;
use version::VersionCache;

pub mod config;
mod compare;
mod explain;
mod sort;

pub fn get_cli() -> Command {
    build_cli(
        Command::new("vercmp")
            .version(env!("CARGO_PKG_VERSION"))
            .about("vercmp : parse, compare and sort version strings")
            .arg(arg!(-c --config <file> "use a specific config file"))
            .subcommand_required(true)
    )
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd.subcommand(sort::args())
        .subcommand(compare::args())
        .subcommand(explain::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {

    let config_file = matches.get_one::<String>("config");
    let config = config::Config::load(config_file.map(String::as_str))?;

    match matches.subcommand() {

        Some(("sort", matches)) => {
            return sort::main(matches, &config);
        }

        Some(("compare", matches)) => {
            return compare::main(matches, &VersionCache::new());
        }

        Some(("explain", matches)) => {
            return explain::main(matches, &VersionCache::new());
        }

        _ =>  {
            anyhow::bail!("no subcmd");
        }
    }
}
