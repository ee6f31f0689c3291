use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered, read-only content attached to a translation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationDocument {
    pub sections: Vec<DocumentSection>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSection {
    pub title: String,
    pub lines: Vec<String>,
}

impl TranslationDocument {
    pub fn new(sections: Vec<DocumentSection>) -> Self {
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.lines.is_empty())
    }
}

impl DocumentSection {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push_line<S: Into<String>>(&mut self, line: S) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for TranslationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            for line in &section.lines {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedTranslationDocument {
    pub name: String,
    pub document: TranslationDocument,
}

impl NamedTranslationDocument {
    pub fn new<S: Into<String>>(name: S, document: TranslationDocument) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }
}
