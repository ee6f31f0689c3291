use crate::translate::microsoft::models::{DictionaryExamples, DictionaryLookup};
use crate::translate::{DocumentSection, TranslationDocument};

/// Groups dictionary translations by part of speech, keeping the order in
/// which the provider ranked them.
pub fn dictionary_document(lookup: &DictionaryLookup) -> TranslationDocument {
    let mut sections: Vec<DocumentSection> = Vec::new();

    for translation in &lookup.translations {
        let title = translation.pos_tag.to_lowercase();
        let index = match sections.iter().position(|s| s.title == title) {
            Some(index) => index,
            None => {
                sections.push(DocumentSection::new(title));
                sections.len() - 1
            }
        };

        let back: Vec<&str> = translation
            .back_translations
            .iter()
            .map(|b| b.display_text.as_str())
            .collect();
        let line = if back.is_empty() {
            translation.display_target.clone()
        } else {
            format!("{} ({})", translation.display_target, back.join(", "))
        };
        sections[index].push_line(line);
    }

    TranslationDocument::new(sections)
}

/// `None` when the provider returned no example sentences at all.
pub fn examples_document(examples: &[DictionaryExamples]) -> Option<TranslationDocument> {
    let sections: Vec<DocumentSection> = examples
        .iter()
        .filter(|e| !e.examples.is_empty())
        .map(|e| {
            let mut section =
                DocumentSection::new(format!("{} -> {}", e.normalized_source, e.normalized_target));
            for example in &e.examples {
                section.push_line(format!(
                    "{} | {}",
                    example.source_sentence(),
                    example.target_sentence()
                ));
            }
            section
        })
        .collect();

    (!sections.is_empty()).then(|| TranslationDocument::new(sections))
}
