//! Caller-supplied brand context.
//!
//! A [`BrandContext`] carries the stylistic rules a caller wants a persona to
//! respect. Only `voiceDescriptors` is interpreted; every other attribute is
//! kept verbatim so it can be handed to the model untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    #[serde(default)]
    pub voice_descriptors: Vec<String>,

    /// Any other brand attributes (audience, values, banned words, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl BrandContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voice_descriptors<I, S>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.voice_descriptors = descriptors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Moves `selected` voice descriptors to the front, see [`prioritize`].
    pub fn prioritize_voices<S: AsRef<str>>(mut self, selected: &[S]) -> Self {
        let selected: Vec<String> = selected.iter().map(|s| s.as_ref().to_string()).collect();
        self.voice_descriptors = prioritize(&selected, &self.voice_descriptors);
        self
    }

    /// Pretty JSON used when embedding the context into a prompt.
    pub fn to_prompt_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|_| format!("voice: {}", self.voice_descriptors.join(", ")))
    }
}

/// Extra per-call context accepted by the task runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_intelligence: Option<BrandContext>,
}

impl AdditionalContext {
    pub fn with_brand(brand: BrandContext) -> Self {
        Self {
            brand_intelligence: Some(brand),
        }
    }
}

/// Returns `selected` followed by the elements of `all` not already selected.
///
/// Relative order is preserved inside both parts and each value appears once.
pub fn prioritize<S: AsRef<str>>(selected: &[S], all: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(selected.len() + all.len());
    for item in selected.iter().chain(all) {
        let item: &str = item.as_ref();
        if seen.insert(item) {
            merged.push(item.to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prioritize_prepends_selected() {
        let merged = prioritize(&["bold", "witty"], &["calm", "witty", "warm", "bold"]);
        assert_eq!(merged, vec!["bold", "witty", "calm", "warm"]);
    }

    #[test]
    fn prioritize_with_empty_selection_keeps_all() {
        let selected: [&str; 0] = [];
        assert_eq!(prioritize(&selected, &["a", "b"]), vec!["a", "b"]);
    }

    #[test]
    fn prioritize_keeps_selected_not_in_all() {
        assert_eq!(prioritize(&["new"], &["a"]), vec!["new", "a"]);
    }

    #[test]
    fn prioritize_drops_repeated_selection() {
        assert_eq!(prioritize(&["a", "a", "b"], &["c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn parses_brand_intelligence_with_extra_attributes() {
        let ctx: AdditionalContext = serde_json::from_value(json!({
            "brandIntelligence": {
                "voiceDescriptors": ["witty"],
                "audience": "indie developers"
            }
        }))
        .unwrap();

        let brand = ctx.brand_intelligence.unwrap();
        assert_eq!(brand.voice_descriptors, vec!["witty"]);
        assert_eq!(brand.attributes["audience"], "indie developers");
    }

    #[test]
    fn prompt_json_contains_descriptors_and_attributes() {
        let brand = BrandContext::new()
            .with_voice_descriptors(["witty"])
            .with_attribute("mission", "Make tea fun");
        let rendered = brand.to_prompt_json();
        assert!(rendered.contains("\"witty\""));
        assert!(rendered.contains("\"mission\": \"Make tea fun\""));
    }
}
