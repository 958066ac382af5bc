use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use comparable_version::VersionKey;
use serde::Serialize;
use std::sync::Arc;
use version::VersionCache;

use crate::compare::relation;

pub fn args() -> Command {
    Command::new("explain")
        .about("Show how versions are parsed")
        .long_about("Print the canonical form of each version, and how it compares to the one before it")
        .arg(arg!(versions: <version>... "Versions to explain"))
        .arg(arg!(--json "output in json lines format"))
}

pub fn main(matches: &clap::ArgMatches, cache: &VersionCache) -> Result<()> {

    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let json = matches.get_flag("json");

    let entries = explain(versions.map(String::as_str), cache);

    for entry in &entries {
        if json {
            println!("{}", serde_json::to_string(entry)?);
        } else {
            for line in entry.lines() {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Explained {
    pub index: usize,
    pub version: String,
    pub canonical: String,

    /// relation of the previous version to this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Previous>,
}

#[derive(Debug, Serialize)]
pub struct Previous {
    pub version: String,
    pub relation: &'static str,
}

impl Explained {

    // "   1.0 < 1.1"
    // "2. 1.1 -> (1,1)"
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(prev) = &self.previous {
            lines.push(format!("   {} {} {}", prev.version, prev.relation, self.version));
        }
        lines.push(format!("{}. {} -> {}", self.index, self.version, self.canonical));
        lines
    }
}

pub fn explain<'a>(versions: impl IntoIterator<Item = &'a str>, cache: &VersionCache) -> Vec<Explained> {

    let mut entries: Vec<Explained> = Vec::new();
    let mut prev: Option<(&str, Arc<VersionKey>)> = None;

    for (idx, v) in versions.into_iter().enumerate() {
        let key = cache.get(v);

        let previous = prev.as_ref().map(|(prev_v, prev_key)| Previous {
            version: String::from(*prev_v),
            relation: relation(comparable_version::compare(prev_key, &key)),
        });

        entries.push(Explained {
            index: idx + 1,
            version: v.to_string(),
            canonical: key.canonical(),
            previous,
        });

        prev = Some((v, key));
    }

    entries
}
