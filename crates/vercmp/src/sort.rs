use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use version::Version;

use crate::config::Config;
use crate::config::SortOrder;

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort versions")
        .long_about("Take a list of versions, sort and print them (descending unless configured otherwise)")
        .visible_alias("vc")
        .arg(arg!(versions: <version>... "Versions to sort"))
        .arg(arg!(--ascending "output in ascending order")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order")
            .overrides_with("ascending")
        )
        .arg(arg!(--"no-dedup" "keep every version, even those that compare equal"))
}

pub fn main(matches: &clap::ArgMatches, config: &Config) -> Result<()> {

    let versions = matches.get_many::<String>("versions").context("version expected")?;

    let order = if matches.get_flag("ascending") {
        SortOrder::Ascending
    } else if matches.get_flag("descending") {
        SortOrder::Descending
    } else {
        config.sort_order
    };

    let dedup = config.dedup && !matches.get_flag("no-dedup");

    tracing::debug!(?order, dedup, "sorting");

    for v in sort_versions(versions.map(String::as_str), order, dedup) {
        println!("{}", v);
    }

    Ok(())
}

/// Equal versions keep their input order; with dedup the first one wins.
pub fn sort_versions<'a>(versions: impl IntoIterator<Item = &'a str>, order: SortOrder, dedup: bool) -> Vec<Version> {

    let mut versions = versions.into_iter().map(Version::new).collect::<Vec<_>>();

    versions.sort();

    if dedup {
        versions.dedup();
    }

    if order == SortOrder::Descending {
        versions.reverse();
    }

    versions
}

#[cfg(test)]
mod test {

    use super::*;

    fn sorted(versions: &[&str], order: SortOrder, dedup: bool) -> Vec<String> {
        sort_versions(versions.iter().copied(), order, dedup)
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn ascending() {
        let versions = ["1.1", "1.0", "1.0-SNAPSHOT", "1.0-rc-1", "1.0.1"];
        assert_eq!(
            sorted(&versions, SortOrder::Ascending, true),
            ["1.0-rc-1", "1.0-SNAPSHOT", "1.0", "1.0.1", "1.1"]
        );
    }

    #[test]
    fn descending() {
        let versions = ["2", "10", "1.9.9"];
        assert_eq!(sorted(&versions, SortOrder::Descending, true), ["10", "2", "1.9.9"]);
    }

    #[test]
    fn dedup() {
        let versions = ["1", "1.0", "1-ga", "2"];
        assert_eq!(sorted(&versions, SortOrder::Ascending, true), ["1", "2"]);
        assert_eq!(sorted(&versions, SortOrder::Ascending, false), ["1", "1.0", "1-ga", "2"]);
    }

    #[test]
    fn flags_override_config() {
        let cmd = Command::new("t").subcommand(args());
        let matches = cmd.try_get_matches_from(["t", "sort", "--ascending", "--descending", "1"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(sub.get_flag("descending"));
        assert!(!sub.get_flag("ascending"));
    }
}
