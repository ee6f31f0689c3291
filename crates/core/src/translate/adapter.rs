use crate::lang::Lang;
use crate::translate::TranslateError;
use std::sync::OnceLock;

/// Maps canonical languages to a provider's wire codes and back.
///
/// The default forward transform is the lowercased canonical code. Entries in
/// `overrides` take precedence in both directions, and languages listed in
/// `unsupported` have no code at all.
pub struct LanguageAdapter {
    overrides: &'static [(&'static str, Lang)],
    unsupported: &'static [Lang],
    source_languages: OnceLock<Vec<Lang>>,
    target_languages: OnceLock<Vec<Lang>>,
}

impl LanguageAdapter {
    pub const fn new(overrides: &'static [(&'static str, Lang)], unsupported: &'static [Lang]) -> Self {
        Self {
            overrides,
            unsupported,
            source_languages: OnceLock::new(),
            target_languages: OnceLock::new(),
        }
    }

    pub fn is_supported(&self, lang: Lang) -> bool {
        !self.unsupported.contains(&lang)
    }

    pub fn supported_source_languages(&self) -> &[Lang] {
        self.source_languages.get_or_init(|| {
            Lang::ALL
                .iter()
                .copied()
                .filter(|lang| self.is_supported(*lang))
                .collect()
        })
    }

    pub fn supported_target_languages(&self) -> &[Lang] {
        self.target_languages.get_or_init(|| {
            self.supported_source_languages()
                .iter()
                .copied()
                .filter(|lang| lang.is_explicit())
                .collect()
        })
    }

    pub fn code_for(&self, lang: Lang) -> Result<String, TranslateError> {
        if !self.is_supported(lang) {
            return Err(TranslateError::unsupported_language(
                lang,
                format!("Unsupported language: {}", lang.name()),
            ));
        }

        let code = self
            .overrides
            .iter()
            .find(|(_, l)| *l == lang)
            .map(|(code, _)| (*code).to_owned())
            .unwrap_or_else(|| lang.code().to_ascii_lowercase());
        Ok(code)
    }

    pub fn language_for(&self, code: &str) -> Result<Lang, TranslateError> {
        if let Some((_, lang)) = self.overrides.iter().find(|(c, _)| *c == code) {
            return Ok(*lang);
        }
        if let Some(lang) = Lang::from_code(code) {
            return Ok(lang);
        }

        // Unknown region or script subtag: retry with the base language.
        match code.split_once(|c| c == '-' || c == '_') {
            Some((base, _)) if !base.is_empty() => self
                .language_for(base)
                .map_err(|_| TranslateError::UnrecognizedLanguageCode(code.to_owned())),
            _ => Err(TranslateError::UnrecognizedLanguageCode(code.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static OVERRIDES: [(&str, Lang); 2] = [("zh-Hans", Lang::Chinese), ("pt", Lang::PortugueseBrazilian)];
    static UNSUPPORTED: [Lang; 2] = [Lang::Portuguese, Lang::Latin];
    static ADAPTER: LanguageAdapter = LanguageAdapter::new(&OVERRIDES, &UNSUPPORTED);

    #[test]
    fn default_transform_lowercases_and_keeps_region() {
        assert_eq!(ADAPTER.code_for(Lang::French).unwrap(), "fr");
        assert_eq!(ADAPTER.code_for(Lang::PortuguesePortugal).unwrap(), "pt-pt");
        assert_eq!(ADAPTER.code_for(Lang::Auto).unwrap(), "auto");
    }

    #[test]
    fn override_wins_over_default_transform() {
        assert_eq!(ADAPTER.code_for(Lang::Chinese).unwrap(), "zh-Hans");
        assert_eq!(ADAPTER.code_for(Lang::PortugueseBrazilian).unwrap(), "pt");
    }

    #[test]
    fn unsupported_language_has_no_code() {
        let err = ADAPTER.code_for(Lang::Latin).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::UnsupportedLanguage { lang: Lang::Latin, .. }
        ));
    }

    #[test]
    fn override_key_beats_generic_parsing() {
        // Generic parsing of "pt" would give the unsupported generic Portuguese.
        assert_eq!(ADAPTER.language_for("pt").unwrap(), Lang::PortugueseBrazilian);
        assert_eq!(ADAPTER.language_for("zh-Hans").unwrap(), Lang::Chinese);
    }

    #[test]
    fn reverse_lookup_falls_back_to_canonical_parsing() {
        assert_eq!(ADAPTER.language_for("fr").unwrap(), Lang::French);
        assert_eq!(ADAPTER.language_for("pt-PT").unwrap(), Lang::PortuguesePortugal);
        assert_eq!(ADAPTER.language_for("pt_pt").unwrap(), Lang::PortuguesePortugal);
        assert_eq!(ADAPTER.language_for("de-AT").unwrap(), Lang::German);
    }

    #[test]
    fn reverse_lookup_fails_for_unknown_codes() {
        assert_eq!(
            ADAPTER.language_for("xx-YY"),
            Err(TranslateError::UnrecognizedLanguageCode("xx-YY".to_owned()))
        );
        assert_eq!(
            ADAPTER.language_for(""),
            Err(TranslateError::UnrecognizedLanguageCode(String::new()))
        );
    }

    #[test]
    fn supported_lists_are_set_differences() {
        let source = ADAPTER.supported_source_languages();
        let target = ADAPTER.supported_target_languages();

        assert_eq!(source.len(), Lang::ALL.len() - UNSUPPORTED.len());
        assert_eq!(source[0], Lang::Auto);
        assert!(!source.contains(&Lang::Latin));
        assert_eq!(target.len(), source.len() - 1);
        assert!(!target.contains(&Lang::Auto));
        assert!(target.windows(2).all(|w| w[0] < w[1]));
    }
}
