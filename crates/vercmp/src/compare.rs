use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use std::cmp::Ordering;
use version::VersionCache;

pub fn args() -> Command {
    Command::new("compare")
        .about("Compare two versions")
        .long_about("Print how the left version relates to the right one: <, == or >")
        .arg(arg!(<left> "version on the left"))
        .arg(arg!(<right> "version on the right"))
        .arg(arg!(--"exit-code" "exit with 0 when equal, 1 when left is older, 2 when left is newer"))
}

pub fn main(matches: &clap::ArgMatches, cache: &VersionCache) -> Result<()> {

    let left = matches.get_one::<String>("left").context("left version expected")?;
    let right = matches.get_one::<String>("right").context("right version expected")?;

    let ordering = comparable_version::compare(&cache.get(left), &cache.get(right));

    println!("{left} {} {right}", relation(ordering));

    if matches.get_flag("exit-code") {
        std::process::exit(exit_status(ordering));
    }

    Ok(())
}

pub fn relation(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

pub fn exit_status(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Equal => 0,
        Ordering::Less => 1,
        Ordering::Greater => 2,
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn relate(cache: &VersionCache, left: &str, right: &str) -> &'static str {
        relation(comparable_version::compare(&cache.get(left), &cache.get(right)))
    }

    #[test]
    fn relations() {
        let cache = VersionCache::new();
        assert_eq!(relate(&cache, "1-1", "1.1"), "<");
        assert_eq!(relate(&cache, "1-0.final.ga", "1"), "==");
        assert_eq!(relate(&cache, "1-1", "1.alpha"), ">");
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn exit_statuses() {
        assert_eq!(exit_status(Ordering::Equal), 0);
        assert_eq!(exit_status(Ordering::Less), 1);
        assert_eq!(exit_status(Ordering::Greater), 2);
    }
}
