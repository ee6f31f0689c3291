//! Wire types of the Translator v3 REST API.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextType {
    Plain,
    Html,
}

impl TextType {
    pub fn as_str(self) -> &'static str {
        match self {
            TextType::Plain => "plain",
            TextType::Html => "html",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct TextItem<'a> {
    pub text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ExampleQuery<'a> {
    pub text: &'a str,
    pub translation: &'a str,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    #[serde(default)]
    pub detected_language: Option<DetectedLanguage>,
    #[serde(default)]
    pub translations: Vec<TranslationItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    #[serde(default)]
    pub score: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranslationItem {
    pub text: String,
    pub to: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryLookup {
    pub normalized_source: String,
    pub display_source: String,
    #[serde(default)]
    pub translations: Vec<DictionaryTranslation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryTranslation {
    pub normalized_target: String,
    pub display_target: String,
    pub pos_tag: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub prefix_word: String,
    #[serde(default)]
    pub back_translations: Vec<BackTranslation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackTranslation {
    pub normalized_text: String,
    pub display_text: String,
    #[serde(default)]
    pub num_examples: u32,
    #[serde(default)]
    pub frequency_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryExamples {
    pub normalized_source: String,
    pub normalized_target: String,
    #[serde(default)]
    pub examples: Vec<DictionaryExample>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryExample {
    pub source_prefix: String,
    pub source_term: String,
    pub source_suffix: String,
    pub target_prefix: String,
    pub target_term: String,
    pub target_suffix: String,
}

impl DictionaryExample {
    pub fn source_sentence(&self) -> String {
        format!("{}{}{}", self.source_prefix, self.source_term, self.source_suffix)
    }

    pub fn target_sentence(&self) -> String {
        format!("{}{}{}", self.target_prefix, self.target_term, self.target_suffix)
    }
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ApiError,
}

/// Error object returned in the body of a failed request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u32,
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    pub const CONTENT_TOO_LONG: u32 = 400050;

    pub fn new<S: Into<String>>(code: u32, message: S) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The provider's message, if it carries anything worth showing.
    pub fn presentable_error(&self) -> Option<&str> {
        let message = self.message.trim();
        (!message.is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translate_response() {
        let json = r#"[{"detectedLanguage":{"language":"en","score":1.0},"translations":[{"text":"bonjour","to":"fr"}]}]"#;
        let parsed: Vec<TranslationResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].detected_language.as_ref().unwrap().language, "en");
        assert_eq!(parsed[0].translations[0].text, "bonjour");
        assert_eq!(parsed[0].translations[0].to, "fr");
    }

    #[test]
    fn parses_dictionary_lookup() {
        let json = r#"{
            "normalizedSource": "fly",
            "displaySource": "fly",
            "translations": [{
                "normalizedTarget": "volar",
                "displayTarget": "volar",
                "posTag": "VERB",
                "confidence": 0.4081,
                "prefixWord": "",
                "backTranslations": [
                    {"normalizedText": "fly", "displayText": "fly", "numExamples": 15, "frequencyCount": 4637}
                ]
            }]
        }"#;
        let lookup: DictionaryLookup = serde_json::from_str(json).unwrap();
        assert_eq!(lookup.translations[0].pos_tag, "VERB");
        assert_eq!(lookup.translations[0].back_translations[0].display_text, "fly");
    }

    #[test]
    fn example_sentences_are_joined() {
        let example = DictionaryExample {
            source_prefix: "They need machines to ".into(),
            source_term: "fly".into(),
            source_suffix: ".".into(),
            target_prefix: "Necesitan máquinas para ".into(),
            target_term: "volar".into(),
            target_suffix: ".".into(),
        };
        assert_eq!(example.source_sentence(), "They need machines to fly.");
        assert_eq!(example.target_sentence(), "Necesitan máquinas para volar.");
    }

    #[test]
    fn request_items_use_pascal_case() {
        let body = serde_json::to_string(&[ExampleQuery { text: "fly", translation: "volar" }]).unwrap();
        assert_eq!(body, r#"[{"Text":"fly","Translation":"volar"}]"#);
    }

    #[test]
    fn text_type_query_values() {
        assert_eq!(TextType::Plain.as_str(), "plain");
        assert_eq!(TextType::Html.as_str(), "html");
    }

    #[test]
    fn blank_error_message_is_not_presentable() {
        assert_eq!(ApiError::new(400000, "  ").presentable_error(), None);
        assert_eq!(ApiError::new(400000, "bad").presentable_error(), Some("bad"));
    }
}
