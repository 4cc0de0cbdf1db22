//! Field specification and per-strategy eligibility resolution.

use serde::{Deserialize, Deserializer, Serialize};
use textquery_core::Strategy;

fn default_boost() -> f64 {
    1.0
}

/// Per-field configuration inside a [`FieldSpec::Rules`] spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Backend field name
    pub name: String,
    /// Per-field boost multiplied into every sub-query boost (default 1.0)
    #[serde(default = "default_boost")]
    pub boost: f64,
    /// Strategies this field accepts; `None` means all of them
    #[serde(default, deserialize_with = "lenient_strategies")]
    pub types: Option<Vec<Strategy>>,
}

impl FieldRule {
    /// Create a rule eligible for every strategy with boost 1.0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            boost: 1.0,
            types: None,
        }
    }

    /// Set the per-field boost.
    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    /// Restrict the field to the given strategies.
    pub fn with_types(mut self, types: impl IntoIterator<Item = Strategy>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    fn allows(&self, strategy: Strategy) -> bool {
        match &self.types {
            Some(types) => types.contains(&strategy),
            None => true,
        }
    }
}

/// Which fields a compiled query targets, and how.
///
/// Either a plain ordered list of names (every field eligible for every
/// strategy with boost 1.0) or an ordered list of [`FieldRule`]s carrying a
/// boost and an optional strategy restriction. Order is significant: emitted
/// sub-queries follow it.
///
/// Serialized form is untagged: a JSON array of strings, or an array of rule
/// objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    /// Bare field names, unrestricted
    Names(Vec<String>),
    /// Per-field rules with boosts and strategy restrictions
    Rules(Vec<FieldRule>),
}

impl FieldSpec {
    /// Build a plain name-list spec.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSpec::Names(names.into_iter().map(Into::into).collect())
    }

    /// Build a rules spec.
    pub fn rules(rules: impl IntoIterator<Item = FieldRule>) -> Self {
        FieldSpec::Rules(rules.into_iter().collect())
    }
}

/// Deserialize a `types` list, silently dropping unknown strategy tags.
fn lenient_strategies<'de, D>(deserializer: D) -> Result<Option<Vec<Strategy>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|tags| tags.iter().filter_map(|tag| Strategy::parse(tag)).collect()))
}

/// A [`FieldSpec`] resolved once per compilation into a per-strategy lookup
/// of `(name, boost)` pairs, preserving the spec's field order.
///
/// Each strategy consults its own eligibility list, so a `types` restriction
/// on one strategy never leaks into another.
#[derive(Debug)]
pub(crate) struct FieldPlan {
    by_strategy: [Vec<(String, f64)>; 4],
}

impl FieldPlan {
    pub(crate) fn new(spec: &FieldSpec) -> Self {
        let by_strategy = std::array::from_fn(|i| {
            let strategy = Strategy::ALL[i];
            match spec {
                FieldSpec::Names(names) => {
                    names.iter().map(|name| (name.clone(), 1.0)).collect()
                }
                FieldSpec::Rules(rules) => rules
                    .iter()
                    .filter(|rule| rule.allows(strategy))
                    .map(|rule| (rule.name.clone(), rule.boost))
                    .collect(),
            }
        });
        Self { by_strategy }
    }

    /// Fields eligible for a strategy, in spec order.
    pub(crate) fn eligible(&self, strategy: Strategy) -> &[(String, f64)] {
        &self.by_strategy[strategy.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_spec_eligible_everywhere() {
        let spec = FieldSpec::names(["title", "description"]);
        let plan = FieldPlan::new(&spec);

        for strategy in Strategy::ALL {
            let eligible = plan.eligible(strategy);
            assert_eq!(eligible.len(), 2);
            assert_eq!(eligible[0], ("title".to_string(), 1.0));
            assert_eq!(eligible[1], ("description".to_string(), 1.0));
        }
    }

    #[test]
    fn test_rules_spec_respects_types() {
        let spec = FieldSpec::rules([
            FieldRule::new("title").with_types([Strategy::Term, Strategy::Fuzzy]),
            FieldRule::new("body"),
        ]);
        let plan = FieldPlan::new(&spec);

        assert_eq!(plan.eligible(Strategy::Term).len(), 2);
        assert_eq!(plan.eligible(Strategy::Fuzzy).len(), 2);
        // title is restricted away from prefix and infix
        assert_eq!(plan.eligible(Strategy::Prefix).len(), 1);
        assert_eq!(plan.eligible(Strategy::Prefix)[0].0, "body");
        assert_eq!(plan.eligible(Strategy::Infix).len(), 1);
    }

    #[test]
    fn test_rules_spec_carries_boost() {
        let spec = FieldSpec::rules([FieldRule::new("title").with_boost(2.5)]);
        let plan = FieldPlan::new(&spec);

        for strategy in Strategy::ALL {
            assert_eq!(plan.eligible(strategy), &[("title".to_string(), 2.5)]);
        }
    }

    #[test]
    fn test_empty_types_list_eligible_nowhere() {
        let spec = FieldSpec::rules([FieldRule::new("title").with_types([])]);
        let plan = FieldPlan::new(&spec);

        for strategy in Strategy::ALL {
            assert!(plan.eligible(strategy).is_empty());
        }
    }

    #[test]
    fn test_plan_preserves_spec_order() {
        let spec = FieldSpec::names(["c", "a", "b"]);
        let plan = FieldPlan::new(&spec);

        let names: Vec<&str> = plan
            .eligible(Strategy::Term)
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_deserialize_name_list() {
        let spec: FieldSpec = serde_json::from_str(r#"["title", "body"]"#).unwrap();
        assert_eq!(spec, FieldSpec::names(["title", "body"]));
    }

    #[test]
    fn test_deserialize_rules() {
        let spec: FieldSpec = serde_json::from_str(
            r#"[{"name": "title", "boost": 2.0, "types": ["term", "fuzzy"]}, {"name": "body"}]"#,
        )
        .unwrap();

        assert_eq!(
            spec,
            FieldSpec::rules([
                FieldRule::new("title")
                    .with_boost(2.0)
                    .with_types([Strategy::Term, Strategy::Fuzzy]),
                FieldRule::new("body"),
            ])
        );
    }

    #[test]
    fn test_deserialize_unknown_type_tags_dropped() {
        let rule: FieldRule =
            serde_json::from_str(r#"{"name": "title", "types": ["term", "phrase", "regex"]}"#)
                .unwrap();
        assert_eq!(rule.types, Some(vec![Strategy::Term]));

        // A field whose every tag is unknown ends up eligible for nothing
        let rule: FieldRule =
            serde_json::from_str(r#"{"name": "title", "types": ["phrase"]}"#).unwrap();
        assert_eq!(rule.types, Some(vec![]));
        for strategy in Strategy::ALL {
            assert!(!rule.allows(strategy));
        }
    }

    #[test]
    fn test_serialize_roundtrip_names() {
        let spec = FieldSpec::names(["title"]);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"["title"]"#);
        let back: FieldSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
