//! Rendered HTML documentation with a replaceable body.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BODY_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<body\b[^>]*>(.*)</body\s*>").expect("body pattern is valid")
});

/// An HTML document split around the content of its `<body>` element.
///
/// Markup without a `<body>` element is treated as a bare body fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlDocument {
    head: String,
    body: String,
    tail: String,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        match BODY_ELEMENT.captures(html).and_then(|c| c.get(1)) {
            Some(body) => Self {
                head: html[..body.start()].to_owned(),
                body: body.as_str().to_owned(),
                tail: html[body.end()..].to_owned(),
            },
            None => Self {
                head: String::new(),
                body: html.to_owned(),
                tail: String::new(),
            },
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn set_body<S: Into<String>>(&mut self, body: S) {
        self.body = body.into();
    }

    pub fn to_html(&self) -> String {
        format!("{}{}{}", self.head, self.body, self.tail)
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.head, self.body, self.tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>t</title></head><BODY class=\"doc\">\n<p>Hello <b>world</b></p>\n</body></html>";

    #[test]
    fn extracts_body_content() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.body(), "\n<p>Hello <b>world</b></p>\n");
        assert_eq!(doc.to_html(), PAGE);
    }

    #[test]
    fn replacing_body_keeps_surrounding_markup() {
        let mut doc = HtmlDocument::parse(PAGE);
        doc.set_body("<p>Bonjour <b>le monde</b></p>");
        assert_eq!(
            doc.to_html(),
            "<html><head><title>t</title></head><BODY class=\"doc\"><p>Bonjour <b>le monde</b></p></body></html>"
        );
    }

    #[test]
    fn fragment_without_body_is_all_body() {
        let doc = HtmlDocument::parse("<p>fragment</p>");
        assert_eq!(doc.body(), "<p>fragment</p>");
        assert_eq!(doc.to_string(), "<p>fragment</p>");
    }

    #[test]
    fn bodyguard_element_is_not_a_body() {
        let doc = HtmlDocument::parse("<bodyguard>x</bodyguard>");
        assert_eq!(doc.body(), "<bodyguard>x</bodyguard>");
    }
}
