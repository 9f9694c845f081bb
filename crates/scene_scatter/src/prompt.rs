//! Keyword vocabulary mapping prompt text to element types.
//!
//! Parsing is deliberately simple: lower-case the prompt and test each known
//! synonym for substring containment, in vocabulary order. There is no
//! stemming or tokenization, so "cowboy" matches "cow"; this quirk is part of
//! the documented behavior and is preserved as-is.
use tracing::debug;

/// Fallback element types used when a prompt matches nothing.
pub const DEFAULT_ELEMENT_TYPES: [&str; 2] = ["tree", "sun"];

/// Ordered keyword table. The entry order defines the order element types are
/// reported in and therefore paint order during composition.
pub struct Vocabulary {
    entries: Vec<(String, Vec<String>)>,
}

impl Vocabulary {
    /// Empty vocabulary with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an element type with its keyword synonyms. An existing entry of
    /// the same name is replaced in place, keeping its position.
    pub fn add_entry<S: Into<String>>(
        &mut self,
        element_type: impl Into<String>,
        keywords: impl IntoIterator<Item = S>,
    ) {
        let element_type = element_type.into();
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();

        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == element_type) {
            entry.1 = keywords;
        } else {
            self.entries.push((element_type, keywords));
        }
    }

    /// Element types in vocabulary order.
    pub fn element_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }

    /// Parse a prompt into the element types whose keywords it mentions.
    ///
    /// Matching is case-insensitive substring containment. The result is in
    /// vocabulary order, never input-word order, with duplicates collapsed
    /// (each type appears at most once). An empty result is not an error;
    /// the caller decides the fallback policy.
    pub fn parse(&self, prompt: &str) -> Vec<String> {
        let lowered = prompt.to_lowercase();
        let matched: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|(element_type, _)| element_type.clone())
            .collect();

        debug!(prompt, matched = ?matched, "parsed prompt");
        matched
    }
}

impl Default for Vocabulary {
    /// Vocabulary for the nine built-in element types.
    fn default() -> Self {
        let mut v = Self::empty();
        v.add_entry("sun", ["sun", "sunny"]);
        v.add_entry("tree", ["tree", "forest", "woods"]);
        v.add_entry("bird", ["bird", "birds", "flying"]);
        v.add_entry("mountain", ["mountain", "mountains", "hill", "hills"]);
        v.add_entry("river", ["river", "stream", "water"]);
        v.add_entry("cloud", ["cloud", "clouds", "cloudy"]);
        v.add_entry("star", ["star", "stars", "night"]);
        v.add_entry("cow", ["cow", "cows", "cattle"]);
        v.add_entry("goat", ["goat", "goats"]);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keyword_yields_single_type() {
        let v = Vocabulary::default();
        assert_eq!(v.parse("a lonely goat"), vec!["goat"]);
        assert_eq!(v.parse("the stream"), vec!["river"]);
    }

    #[test]
    fn result_order_is_vocabulary_order() {
        let v = Vocabulary::default();
        // Prompt mentions river first, but vocabulary order wins.
        let parsed = v.parse("a river below a sunny mountain");
        assert_eq!(parsed, vec!["sun", "mountain", "river"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let v = Vocabulary::default();
        assert_eq!(v.parse("A SUNNY Day"), vec!["sun"]);
    }

    #[test]
    fn substring_containment_quirk_is_preserved() {
        let v = Vocabulary::default();
        // "cowboy" contains "cow"; no tokenization by design.
        assert_eq!(v.parse("a cowboy rides"), vec!["cow"]);
    }

    #[test]
    fn duplicates_collapse() {
        let v = Vocabulary::default();
        assert_eq!(v.parse("trees and more trees in the forest"), vec!["tree"]);
    }

    #[test]
    fn empty_prompt_matches_nothing() {
        let v = Vocabulary::default();
        assert!(v.parse("").is_empty());
        assert!(v.parse("quantum chromodynamics").is_empty());
    }

    #[test]
    fn added_entries_extend_the_vocabulary_in_order() {
        let mut v = Vocabulary::default();
        v.add_entry("castle", ["castle", "fortress"]);
        assert_eq!(v.parse("a castle by a river"), vec!["river", "castle"]);

        // Replacing keeps the original position.
        v.add_entry("sun", ["sol"]);
        assert_eq!(v.parse("sol over the castle"), vec!["sun", "castle"]);
    }
}
