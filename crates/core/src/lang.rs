//! Canonical language enumeration.
//!
//! Variants are declared in listing order: `Auto` first, then by display name.
//! The derived `Ord` follows declaration order, so sorting a list of `Lang`
//! values yields the order shown to users.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! languages {
    ($($variant:ident => ($code:literal, $name:literal)),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Lang {
            $($variant),+
        }

        impl Lang {
            /// Every language, in listing order.
            pub const ALL: &'static [Lang] = &[$(Lang::$variant),+];

            /// Stable internal identifier, e.g. `"zh-CN"`.
            pub fn code(self) -> &'static str {
                match self {
                    $(Lang::$variant => $code),+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Lang::$variant => $name),+
                }
            }
        }
    };
}

languages! {
    Auto => ("auto", "Auto Detect"),
    Afrikaans => ("af", "Afrikaans"),
    Albanian => ("sq", "Albanian"),
    Amharic => ("am", "Amharic"),
    Arabic => ("ar", "Arabic"),
    Armenian => ("hy", "Armenian"),
    Assamese => ("as", "Assamese"),
    Azerbaijani => ("az", "Azerbaijani"),
    Bashkir => ("ba", "Bashkir"),
    Basque => ("eu", "Basque"),
    Belarusian => ("be", "Belarusian"),
    Bengali => ("bn", "Bengali"),
    Bosnian => ("bs", "Bosnian"),
    Bulgarian => ("bg", "Bulgarian"),
    Catalan => ("ca", "Catalan"),
    Cebuano => ("ceb", "Cebuano"),
    Chichewa => ("ny", "Chichewa"),
    ChineseCantonese => ("yue", "Chinese (Cantonese)"),
    ChineseClassical => ("lzh", "Chinese (Classical)"),
    Chinese => ("zh-CN", "Chinese (Simplified)"),
    ChineseTraditional => ("zh-TW", "Chinese (Traditional)"),
    Corsican => ("co", "Corsican"),
    Croatian => ("hr", "Croatian"),
    Czech => ("cs", "Czech"),
    Danish => ("da", "Danish"),
    Dari => ("prs", "Dari"),
    Divehi => ("dv", "Divehi"),
    Dutch => ("nl", "Dutch"),
    English => ("en", "English"),
    EnglishAmerican => ("en-US", "English (American)"),
    EnglishBritish => ("en-GB", "English (British)"),
    Esperanto => ("eo", "Esperanto"),
    Estonian => ("et", "Estonian"),
    Faroese => ("fo", "Faroese"),
    Fijian => ("fj", "Fijian"),
    Filipino => ("tl", "Filipino"),
    Finnish => ("fi", "Finnish"),
    French => ("fr", "French"),
    FrenchCanadian => ("fr-CA", "French (Canada)"),
    Frisian => ("fy", "Frisian"),
    Galician => ("gl", "Galician"),
    Georgian => ("ka", "Georgian"),
    German => ("de", "German"),
    Greek => ("el", "Greek"),
    Gujarati => ("gu", "Gujarati"),
    HaitianCreole => ("ht", "Haitian Creole"),
    Hausa => ("ha", "Hausa"),
    Hawaiian => ("haw", "Hawaiian"),
    Hebrew => ("iw", "Hebrew"),
    Hindi => ("hi", "Hindi"),
    Hmong => ("hmn", "Hmong"),
    Hungarian => ("hu", "Hungarian"),
    Icelandic => ("is", "Icelandic"),
    Igbo => ("ig", "Igbo"),
    Indonesian => ("id", "Indonesian"),
    Inuktitut => ("iu", "Inuktitut"),
    Irish => ("ga", "Irish"),
    Italian => ("it", "Italian"),
    Japanese => ("ja", "Japanese"),
    Javanese => ("jw", "Javanese"),
    Kannada => ("kn", "Kannada"),
    Kazakh => ("kk", "Kazakh"),
    Khmer => ("km", "Khmer"),
    Kinyarwanda => ("rw", "Kinyarwanda"),
    Korean => ("ko", "Korean"),
    Kurdish => ("ku", "Kurdish"),
    KurdishKurmanji => ("kmr", "Kurdish (Kurmanji)"),
    KurdishSorani => ("ckb", "Kurdish (Sorani)"),
    Kyrgyz => ("ky", "Kyrgyz"),
    Lao => ("lo", "Lao"),
    Latin => ("la", "Latin"),
    Latvian => ("lv", "Latvian"),
    Lithuanian => ("lt", "Lithuanian"),
    Luxembourgish => ("lb", "Luxembourgish"),
    Macedonian => ("mk", "Macedonian"),
    Malagasy => ("mg", "Malagasy"),
    Malay => ("ms", "Malay"),
    Malayalam => ("ml", "Malayalam"),
    Maltese => ("mt", "Maltese"),
    Maori => ("mi", "Maori"),
    Marathi => ("mr", "Marathi"),
    Mongolian => ("mn", "Mongolian"),
    Myanmar => ("my", "Myanmar (Burmese)"),
    Nepali => ("ne", "Nepali"),
    Norwegian => ("no", "Norwegian"),
    Odia => ("or", "Odia"),
    Pashto => ("ps", "Pashto"),
    Persian => ("fa", "Persian"),
    Polish => ("pl", "Polish"),
    Portuguese => ("pt", "Portuguese"),
    PortugueseBrazilian => ("pt-BR", "Portuguese (Brazil)"),
    PortuguesePortugal => ("pt-PT", "Portuguese (Portugal)"),
    Punjabi => ("pa", "Punjabi"),
    Romanian => ("ro", "Romanian"),
    Russian => ("ru", "Russian"),
    Samoan => ("sm", "Samoan"),
    ScotsGaelic => ("gd", "Scots Gaelic"),
    Serbian => ("sr", "Serbian"),
    SerbianCyrillic => ("sr-Cyrl", "Serbian (Cyrillic)"),
    SerbianLatin => ("sr-Latn", "Serbian (Latin)"),
    Sesotho => ("st", "Sesotho"),
    Shona => ("sn", "Shona"),
    Sindhi => ("sd", "Sindhi"),
    Sinhala => ("si", "Sinhala"),
    Slovak => ("sk", "Slovak"),
    Slovenian => ("sl", "Slovenian"),
    Somali => ("so", "Somali"),
    Spanish => ("es", "Spanish"),
    Sundanese => ("su", "Sundanese"),
    Swahili => ("sw", "Swahili"),
    Swedish => ("sv", "Swedish"),
    Tahitian => ("ty", "Tahitian"),
    Tajik => ("tg", "Tajik"),
    Tamil => ("ta", "Tamil"),
    Tatar => ("tt", "Tatar"),
    Telugu => ("te", "Telugu"),
    Thai => ("th", "Thai"),
    Tibetan => ("bo", "Tibetan"),
    Tigrinya => ("ti", "Tigrinya"),
    Tongan => ("to", "Tongan"),
    Turkish => ("tr", "Turkish"),
    Turkmen => ("tk", "Turkmen"),
    Ukrainian => ("uk", "Ukrainian"),
    Urdu => ("ur", "Urdu"),
    Uyghur => ("ug", "Uyghur"),
    Uzbek => ("uz", "Uzbek"),
    Vietnamese => ("vi", "Vietnamese"),
    Welsh => ("cy", "Welsh"),
    Xhosa => ("xh", "Xhosa"),
    Yiddish => ("yi", "Yiddish"),
    Yoruba => ("yo", "Yoruba"),
    Zulu => ("zu", "Zulu"),
}

impl Lang {
    /// Any language other than [`Lang::Auto`].
    pub fn is_explicit(self) -> bool {
        self != Lang::Auto
    }

    /// Replaces the auto-detect sentinel with English.
    pub fn to_explicit(self) -> Lang {
        match self {
            Lang::Auto => Lang::English,
            lang => lang,
        }
    }

    /// Parses a canonical identifier. Case is ignored and `_` is accepted
    /// in place of `-`.
    pub fn from_code(code: &str) -> Option<Lang> {
        let normalized = code.trim().replace('_', "-");
        Lang::ALL
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(&normalized))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct ParseLangError(pub String);

impl FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| ParseLangError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn auto_is_first_and_not_explicit() {
        assert_eq!(Lang::ALL[0], Lang::Auto);
        assert!(!Lang::Auto.is_explicit());
        assert!(Lang::French.is_explicit());
    }

    #[test]
    fn to_explicit_only_touches_auto() {
        assert_eq!(Lang::Auto.to_explicit(), Lang::English);
        assert_eq!(Lang::Japanese.to_explicit(), Lang::Japanese);
    }

    #[test]
    fn declaration_order_is_listing_order() {
        let mut sorted = Lang::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, Lang::ALL);

        let names: Vec<&str> = Lang::ALL[1..].iter().map(|l| l.name()).collect();
        let mut by_name = names.clone();
        by_name.sort_unstable();
        assert_eq!(names, by_name);
    }

    #[test]
    fn codes_are_unique_ignoring_case() {
        let mut seen = HashSet::new();
        for lang in Lang::ALL {
            assert!(
                seen.insert(lang.code().to_ascii_lowercase()),
                "duplicate code {}",
                lang.code()
            );
        }
    }

    #[test]
    fn from_code_ignores_case_and_underscores() {
        assert_eq!(Lang::from_code("zh-cn"), Some(Lang::Chinese));
        assert_eq!(Lang::from_code("PT_br"), Some(Lang::PortugueseBrazilian));
        assert_eq!(Lang::from_code("en"), Some(Lang::English));
        assert_eq!(Lang::from_code("xx"), None);
    }

    #[test]
    fn from_str_reports_unknown_code() {
        assert_eq!("fr".parse::<Lang>(), Ok(Lang::French));
        assert_eq!(
            "klingon".parse::<Lang>(),
            Err(ParseLangError("klingon".to_owned()))
        );
    }
}
