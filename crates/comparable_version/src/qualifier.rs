/// Known qualifiers, lowest first. "" is the release.
pub const QUALIFIERS: &[&str] = &["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

const RELEASE_INDEX: usize = 5;

/// Order key of a qualifier.
///
/// Known qualifiers order by their position in [QUALIFIERS], unknown ones come
/// after all of them and order by their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank<'a> {
    Known(usize),
    Unknown(&'a str),
}

pub const RELEASE: Rank<'static> = Rank::Known(RELEASE_INDEX);

pub fn rank(qualifier: &str) -> Rank<'_> {
    match QUALIFIERS.iter().position(|q| *q == qualifier) {
        Some(idx) => Rank::Known(idx),
        None => Rank::Unknown(qualifier),
    }
}

// only applies to a single letter directly followed by a digit: "m1" is milestone 1
pub(crate) fn expand_shorthand(letter: &str) -> Option<&'static str> {
    match letter {
        "a" => Some("alpha"),
        "b" => Some("beta"),
        "m" => Some("milestone"),
        _ => None,
    }
}

pub(crate) fn resolve_alias(qualifier: &str) -> &str {
    match qualifier {
        "ga" | "final" | "release" => "",
        "cr" => "rc",
        _ => qualifier,
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn release_is_empty() {
        assert_eq!(QUALIFIERS[RELEASE_INDEX], "");
        assert_eq!(rank(""), RELEASE);
    }

    #[test]
    fn known_before_unknown() {
        assert!(rank("alpha") < rank("beta"));
        assert!(rank("snapshot") < RELEASE);
        assert!(RELEASE < rank("sp"));
        assert!(rank("sp") < rank("a"));
        assert!(rank("xx") < rank("xxx"));
        assert!(rank("abc") < rank("def"));
    }

    #[test]
    fn aliases() {
        assert_eq!(resolve_alias("ga"), "");
        assert_eq!(resolve_alias("final"), "");
        assert_eq!(resolve_alias("release"), "");
        assert_eq!(resolve_alias("cr"), "rc");
        assert_eq!(resolve_alias("rc"), "rc");
        assert_eq!(resolve_alias("GA"), "GA");

        assert_eq!(expand_shorthand("a"), Some("alpha"));
        assert_eq!(expand_shorthand("c"), None);
        assert_eq!(expand_shorthand("ab"), None);
    }
}
