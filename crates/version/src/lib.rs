use comparable_version::VersionKey;
use serde::{Serialize, Deserialize};
use std::sync::OnceLock;

mod cache;

pub use cache::VersionCache;

/// A version string that is parsed the first time it is compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "VersionString", into = "VersionString")]
pub struct Version {
    raw: VersionString,
    key: OnceLock<VersionKey>,
}

/// A raw version string. Compares by parsing both sides every time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionString(pub String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn key(&self) -> VersionKey {
        VersionKey::parse(&self.0)
    }
}

impl PartialOrd for VersionString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionString {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialEq for VersionString {
    fn eq(&self, other: &VersionString) -> bool {
        self.key().eq(&other.key())
    }
}

impl Eq for VersionString {}

impl From<VersionString> for Version {
    fn from(v: VersionString) -> Self {
        Self {
            raw: v,
            key: OnceLock::new(),
        }
    }
}

impl From<Version> for VersionString {
    fn from(v: Version) -> Self {
        v.raw
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::new(s)
    }
}

impl From<String> for VersionString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Version {

    pub fn new(v: &str) -> Self {
        VersionString::from(v).into()
    }

    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// The parsed key, built on first use.
    pub fn key(&self) -> &VersionKey {
        self.key.get_or_init(|| self.raw.key())
    }

    /// "1.0-1" -> "(1,(1))"
    pub fn canonical(&self) -> String {
        self.key().canonical()
    }

    /// Sorts below the plain release made of its leading numbers.
    /// "1.0-rc1" and "1.0-SNAPSHOT" are, "1.0-sp1" and "1.0-1" are not.
    pub fn is_prerelease(&self) -> bool {
        let release = VersionKey::from_items("", release_items(self.key().items()));
        self.key() < &release
    }
}

// the numbers in front of the first qualifier or nested list
fn release_items(items: &[comparable_version::Item]) -> Vec<comparable_version::Item> {
    items
        .iter()
        .take_while(|item| matches!(item, comparable_version::Item::Number(_)))
        .cloned()
        .collect()
}

impl std::ops::Deref for Version {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::ops::Deref for VersionString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Version) -> bool {
        self.key().eq(other.key())
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> std::cmp::Ordering {
        self.key().cmp(other.key())
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::fmt::Display for VersionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_ordering() {
        let s1 = "1.2.3-7.1.2";
        let s2 = "1.2.3-7.1.10";

        let v1 = Version::new(s1);
        let v2 = Version::new(s2);
        assert!(v1 < v2);
    }

    #[test]
    fn subpart_ordering() {
        let s1 = "1.2.3-7-2-a";
        let s2 = "1.2.3-7-10-a";

        let v1 = Version::new(s1);
        let v2 = Version::new(s2);
        assert!(v1 < v2);
    }

    #[test]
    fn case_blind() {
        let v1 = Version::new("1.2.3-SNAPSHOT");
        let v2 = Version::new("1.2.3-snapshot");
        assert!(v1 == v2);
        assert_eq!(v1.as_str(), "1.2.3-SNAPSHOT");

        assert!(VersionString::from("1-RC-1") == VersionString::from("1-cr-1"));
    }

    #[test]
    fn release_synonyms() {
        let v1 = Version::new("2.0");
        let v2 = Version::new("2-GA");
        let v3 = Version::new("2.0.0.final");
        assert!(v1 == v2);
        assert!(v2 == v3);
        assert!(Version::new("2-rc1") < v1);
        assert!(v1 < Version::new("2-sp1"));
    }

    #[test]
    fn prerelease() {
        assert!(Version::new("1.0-SNAPSHOT").is_prerelease());
        assert!(Version::new("1.0-rc-1").is_prerelease());
        assert!(Version::new("1.0a1").is_prerelease());
        assert!(!Version::new("1.0").is_prerelease());
        assert!(!Version::new("1.0-sp1").is_prerelease());
        assert!(!Version::new("1.0-1").is_prerelease());
        assert!(!Version::new("1.0.final").is_prerelease());
    }

    #[test]
    fn key_is_cached() {
        let v = Version::new("1.0-1");
        let first: *const VersionKey = v.key();
        let second: *const VersionKey = v.key();
        assert_eq!(first, second);
        assert_eq!(v.canonical(), "(1,(1))");
    }

    #[test]
    fn serde_is_a_plain_string() {
        let v = Version::new("1.0-beta-2");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.0-beta-2\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "1.0-beta-2");
        assert_eq!(back, v);
    }

    #[test]
    fn sorting() {
        let mut versions = ["1.10", "1.9", "1.9-SNAPSHOT", "1.9.0.1", "1.10-m1"]
            .iter()
            .map(|s| Version::new(s))
            .collect::<Vec<_>>();
        versions.sort();
        let sorted = versions.iter().map(Version::as_str).collect::<Vec<_>>();
        assert_eq!(sorted, ["1.9-SNAPSHOT", "1.9", "1.9.0.1", "1.10-m1", "1.10"]);
    }
}
