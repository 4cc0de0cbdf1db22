//! Match strategies for query expansion.

use serde::{Deserialize, Serialize};

/// One of the four matching approaches a word can be expanded into.
///
/// The declaration order is the expansion order: exact term first, then
/// prefix, infix (substring/wildcard), and fuzzy (edit-distance) last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exact term match
    Term,
    /// Prefix match
    Prefix,
    /// Infix (substring) match via wildcard
    Infix,
    /// Fuzzy (edit-distance) match
    Fuzzy,
}

impl Strategy {
    /// All strategies, in expansion order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Term,
        Strategy::Prefix,
        Strategy::Infix,
        Strategy::Fuzzy,
    ];

    /// Lowercase tag used in field-spec `types` restrictions.
    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Term => "term",
            Strategy::Prefix => "prefix",
            Strategy::Infix => "infix",
            Strategy::Fuzzy => "fuzzy",
        }
    }

    /// Parse a strategy tag leniently.
    ///
    /// Unknown tags yield `None` rather than an error: a field-spec `types`
    /// entry referencing a tag we do not know is treated as "not eligible"
    /// instead of being rejected.
    pub fn parse(tag: &str) -> Option<Strategy> {
        match tag {
            "term" => Some(Strategy::Term),
            "prefix" => Some(Strategy::Prefix),
            "infix" => Some(Strategy::Infix),
            "fuzzy" => Some(Strategy::Fuzzy),
            _ => None,
        }
    }

    /// Position in [`Strategy::ALL`], usable as a dense array index.
    pub fn index(self) -> usize {
        match self {
            Strategy::Term => 0,
            Strategy::Prefix => 1,
            Strategy::Infix => 2,
            Strategy::Fuzzy => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_expansion_order() {
        assert_eq!(
            Strategy::ALL,
            [
                Strategy::Term,
                Strategy::Prefix,
                Strategy::Infix,
                Strategy::Fuzzy
            ]
        );
    }

    #[test]
    fn test_tag_roundtrip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::parse(strategy.tag()), Some(strategy));
        }
    }

    #[test]
    fn test_parse_unknown_tag_is_none() {
        assert_eq!(Strategy::parse("phrase"), None);
        assert_eq!(Strategy::parse(""), None);
        assert_eq!(Strategy::parse("TERM"), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), i);
        }
    }

    #[test]
    fn test_serde_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Strategy::Term).unwrap(), "\"term\"");
        assert_eq!(
            serde_json::to_string(&Strategy::Fuzzy).unwrap(),
            "\"fuzzy\""
        );

        let parsed: Strategy = serde_json::from_str("\"prefix\"").unwrap();
        assert_eq!(parsed, Strategy::Prefix);
    }
}
