//! Microsoft Translator language codes.

use crate::lang::Lang;
use crate::translate::LanguageAdapter;

static UNSUPPORTED_LANGUAGES: [Lang; 29] = [
    Lang::Belarusian,
    Lang::Cebuano,
    Lang::Chichewa,
    Lang::Corsican,
    Lang::EnglishAmerican,
    Lang::EnglishBritish,
    Lang::Esperanto,
    Lang::Frisian,
    Lang::Hausa,
    Lang::Hawaiian,
    Lang::Igbo,
    Lang::Javanese,
    Lang::Kinyarwanda,
    // Only the Kurmanji and Sorani variants exist on the provider side.
    Lang::Kurdish,
    Lang::Kyrgyz,
    Lang::Latin,
    Lang::Luxembourgish,
    Lang::Malagasy,
    Lang::Portuguese,
    Lang::ScotsGaelic,
    Lang::Serbian,
    Lang::Sesotho,
    Lang::Shona,
    Lang::Sindhi,
    Lang::Sinhala,
    Lang::Sundanese,
    Lang::Tajik,
    Lang::Xhosa,
    Lang::Yiddish,
];

// "pt" and "ku" must stay explicit: parsing them generically yields the
// generic Portuguese and Kurdish, neither of which the provider accepts.
static ADAPTED_LANGUAGES: [(&str, Lang); 12] = [
    ("yue", Lang::ChineseCantonese),
    ("lzh", Lang::ChineseClassical),
    ("zh-Hans", Lang::Chinese),
    ("zh-Hant", Lang::ChineseTraditional),
    ("fil", Lang::Filipino),
    ("he", Lang::Hebrew),
    ("mww", Lang::Hmong),
    ("mn-Mong", Lang::Mongolian),
    ("nb", Lang::Norwegian),
    ("kmr", Lang::KurdishKurmanji),
    ("ku", Lang::KurdishSorani),
    ("pt", Lang::PortugueseBrazilian),
];

pub static MICROSOFT_LANGUAGES: LanguageAdapter =
    LanguageAdapter::new(&ADAPTED_LANGUAGES, &UNSUPPORTED_LANGUAGES);
