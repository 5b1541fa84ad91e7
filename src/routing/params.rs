//! Parameters handed to a controller action.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

/// String parameters collected for one dispatch.
///
/// Built from the named captures of the matched pattern, then topped up
/// with query-string values that don't collide with a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Named captures of `pattern` applied to `path`.
    /// Groups that didn't participate in the match are skipped.
    pub fn from_captures(pattern: &Regex, path: &str) -> Self {
        let mut params = Self::new();
        if let Some(caps) = pattern.captures(path) {
            for name in pattern.capture_names().flatten() {
                if let Some(m) = caps.name(name) {
                    params.insert(name, m.as_str());
                }
            }
        }
        params
    }

    /// Merge query parameters; existing keys win.
    pub fn merge_query<'a, I>(mut self, query: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (k, v) in query {
            self.values.entry(k.clone()).or_insert_with(|| v.clone());
        }
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_named_captures() {
        let re = Regex::new(r"^/users/(?<user_id>\d+)/posts/(?<id>\d+)$").unwrap();
        let params = Params::from_captures(&re, "/users/3/posts/14");

        assert_eq!(params.get("user_id"), Some("3"));
        assert_eq!(params.get("id"), Some("14"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_unnamed_and_optional_groups_skipped() {
        let re = Regex::new(r"^/(users)/(?<id>\d+)(?:\.(?<format>json))?$").unwrap();
        let params = Params::from_captures(&re, "/users/5");

        assert_eq!(params.get("id"), Some("5"));
        assert!(!params.contains("format"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let re = Regex::new(r"^/users/(?<id>\d+)$").unwrap();
        assert!(Params::from_captures(&re, "/statuses/1").is_empty());
    }

    #[test]
    fn test_captures_win_over_query() {
        let re = Regex::new(r"^/users/(?<id>\d+)$").unwrap();
        let query: HashMap<String, String> = [
            ("id".to_string(), "999".to_string()),
            ("page".to_string(), "2".to_string()),
        ]
        .into_iter()
        .collect();

        let params = Params::from_captures(&re, "/users/1").merge_query(&query);
        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.get("page"), Some("2"));
    }
}
