// src/links.rs

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern is valid")
});

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("token pattern is valid"));

/// A piece of rendered message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Email(&'a str),
    Url(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Text(s) | Segment::Email(s) | Segment::Url(s) => s,
        }
    }

    /// Where activating this segment goes, if it is a link.
    pub fn href(&self) -> Option<String> {
        match self {
            Segment::Text(_) => None,
            Segment::Email(address) => Some(format!("mailto:{}", address)),
            Segment::Url(url) => Some((*url).to_string()),
        }
    }
}

pub fn classify(token: &str) -> Segment<'_> {
    if EMAIL.is_match(token) {
        Segment::Email(token)
    } else if token.starts_with("http://") || token.starts_with("https://") {
        Segment::Url(token)
    } else {
        Segment::Text(token)
    }
}

/// Splits one line into segments. Whitespace between tokens is kept as text.
pub fn segment_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for token in TOKEN.find_iter(line) {
        if token.start() > cursor {
            segments.push(Segment::Text(&line[cursor..token.start()]));
        }
        segments.push(classify(token.as_str()));
        cursor = token.end();
    }
    if cursor < line.len() {
        segments.push(Segment::Text(&line[cursor..]));
    }
    segments
}

/// Segments every line of a message; line breaks are preserved.
pub fn segment_text(text: &str) -> Vec<Vec<Segment<'_>>> {
    text.split('\n').map(segment_line).collect()
}

/// All link targets in a text, in reading order.
pub fn hrefs(text: &str) -> Vec<String> {
    segment_text(text)
        .iter()
        .flatten()
        .filter_map(Segment::href)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_becomes_mailto() {
        let segment = classify("darjidikshit30@gmail.com");
        assert_eq!(segment, Segment::Email("darjidikshit30@gmail.com"));
        assert_eq!(
            segment.href().as_deref(),
            Some("mailto:darjidikshit30@gmail.com")
        );
        assert!(matches!(classify("First.Last@Example.ORG"), Segment::Email(_)));
    }

    #[test]
    fn test_email_needs_two_letter_tld() {
        assert_eq!(classify("me@host.c"), Segment::Text("me@host.c"));
        assert_eq!(classify("me@host"), Segment::Text("me@host"));
        assert_eq!(classify("@gmail.com"), Segment::Text("@gmail.com"));
    }

    #[test]
    fn test_urls() {
        let url = "https://github.com/DikshitDarji?tab=repositories";
        assert_eq!(classify(url), Segment::Url(url));
        assert_eq!(classify(url).href().as_deref(), Some(url));
        assert!(matches!(classify("http://example.com"), Segment::Url(_)));
        assert_eq!(classify("www.example.com"), Segment::Text("www.example.com"));
        assert_eq!(classify("ftp://example.com"), Segment::Text("ftp://example.com"));
    }

    #[test]
    fn test_plain_text_stays_plain() {
        for token in ["Phone:", "+91", "9828418225", "•", "LinkedIn:"] {
            assert_eq!(classify(token), Segment::Text(token));
        }
    }

    #[test]
    fn test_segment_line_keeps_whitespace() {
        let segments = segment_line("• Email: darjidikshit30@gmail.com");
        let rebuilt: String = segments.iter().map(Segment::as_str).collect();
        assert_eq!(rebuilt, "• Email: darjidikshit30@gmail.com");
        assert_eq!(
            segments.last(),
            Some(&Segment::Email("darjidikshit30@gmail.com"))
        );
        assert_eq!(segments.iter().filter(|s| s.href().is_some()).count(), 1);
    }

    #[test]
    fn test_line_breaks_are_preserved() {
        let lines = segment_text("📍 Location:\nParsad, Udaipur, Rajasthan");
        assert_eq!(lines.len(), 2);

        let lines = segment_text("a\n\nb");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
    }

    #[test]
    fn test_hrefs_in_contact_block() {
        let hrefs = hrefs(crate::constants::CONTACT);
        assert_eq!(
            hrefs,
            vec![
                "https://www.linkedin.com/in/dikshit-darji-0a0989249/".to_string(),
                "mailto:darjidikshit30@gmail.com".to_string(),
            ]
        );
    }
}
