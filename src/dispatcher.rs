// src/dispatcher.rs

use crate::constants::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A command the visitor can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    More,
    Skills,
    Resume,
    Education,
    Address,
    Contact,
    Projects,
    Clear,
}

impl Keyword {
    pub const ALL: [Keyword; 8] = [
        Keyword::More,
        Keyword::Skills,
        Keyword::Resume,
        Keyword::Education,
        Keyword::Address,
        Keyword::Contact,
        Keyword::Projects,
        Keyword::Clear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::More => "more",
            Keyword::Skills => "skills",
            Keyword::Resume => "resume",
            Keyword::Education => "education",
            Keyword::Address => "address",
            Keyword::Contact => "contact",
            Keyword::Projects => "projects",
            Keyword::Clear => "clear",
        }
    }

    /// One-line help shown by `more`. `more` itself is not listed.
    pub fn description(&self) -> Option<&'static str> {
        match self {
            Keyword::More => None,
            Keyword::Skills => Some("See my technical skills"),
            Keyword::Resume => Some("Download my resume"),
            Keyword::Education => Some("View my educational background"),
            Keyword::Address => Some("Get my location"),
            Keyword::Contact => Some("Find my contact information"),
            Keyword::Projects => Some("Check out my projects"),
            Keyword::Clear => Some("Clear the chat"),
        }
    }

    /// Exact match after trimming and lowercasing.
    pub fn parse(input: &str) -> Option<Keyword> {
        let normalized = normalize(input);
        Keyword::ALL
            .into_iter()
            .find(|keyword| keyword.as_str() == normalized)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scripted reply, materialized into a message by the typing sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub has_download_action: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_download_action: false,
        }
    }

    pub fn download(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_download_action: true,
        }
    }
}

/// What the session should do with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Replies(Vec<Reply>),
    Reset,
}

type Responder = fn() -> Dispatch;

static RESPONDERS: Lazy<HashMap<Keyword, Responder>> = Lazy::new(|| {
    let mut table: HashMap<Keyword, Responder> = HashMap::new();
    table.insert(Keyword::More, more);
    table.insert(Keyword::Skills, skills);
    table.insert(Keyword::Resume, resume);
    table.insert(Keyword::Education, || single(EDUCATION));
    table.insert(Keyword::Address, || single(ADDRESS));
    table.insert(Keyword::Contact, || single(CONTACT));
    table.insert(Keyword::Projects, || single(PROJECTS));
    table.insert(Keyword::Clear, || Dispatch::Reset);
    table
});

pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Maps raw input to its scripted replies. Unknown input gets the fallback reply.
pub fn dispatch(input: &str) -> Dispatch {
    match Keyword::parse(input).and_then(|keyword| RESPONDERS.get(&keyword)) {
        Some(responder) => responder(),
        None => fallback(),
    }
}

fn single(text: &str) -> Dispatch {
    Dispatch::Replies(vec![Reply::text(text)])
}

fn more() -> Dispatch {
    let mut text = MORE_HEADER.to_string();
    for keyword in Keyword::ALL {
        if let Some(description) = keyword.description() {
            text.push_str(&format!("\n• {} - {}", keyword, description));
        }
    }
    Dispatch::Replies(vec![Reply::text(text)])
}

fn skills() -> Dispatch {
    single(&format!(
        "{}\n{}",
        SKILLS_HEADER,
        SKILLS.join(SKILLS_DELIMITER)
    ))
}

fn resume() -> Dispatch {
    Dispatch::Replies(vec![
        Reply::text(RESUME_LEAD_IN),
        Reply::download(RESUME_DOWNLOAD),
    ])
}

fn fallback() -> Dispatch {
    single(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(input: &str) -> Vec<Reply> {
        match dispatch(input) {
            Dispatch::Replies(replies) => replies,
            Dispatch::Reset => panic!("unexpected reset for {:?}", input),
        }
    }

    #[test]
    fn test_every_keyword_has_a_responder() {
        for keyword in Keyword::ALL {
            assert!(RESPONDERS.contains_key(&keyword), "missing {}", keyword);
        }
    }

    #[test]
    fn test_more_lists_seven_keywords() {
        let replies = replies("more");
        assert_eq!(replies.len(), 1);
        let expected = "Here are some keywords you can type to learn more about me:\n\
            • skills - See my technical skills\n\
            • resume - Download my resume\n\
            • education - View my educational background\n\
            • address - Get my location\n\
            • contact - Find my contact information\n\
            • projects - Check out my projects\n\
            • clear - Clear the chat";
        assert_eq!(replies[0].text, expected);
        assert_eq!(replies[0].text.lines().count(), 8);
    }

    #[test]
    fn test_skills() {
        let replies = replies("skills");
        assert_eq!(
            replies,
            vec![Reply::text(
                "My Technical Skills:\nHTML • CSS • JavaScript • React • Node • Express • MongoDB • C • C++ • Docker"
            )]
        );
    }

    #[test]
    fn test_resume_has_two_replies_and_only_second_downloads() {
        let replies = replies("resume");
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0].text, "You can download my resume here:");
        assert!(!replies[0].has_download_action);
        assert_eq!(replies[1].text, "📄 Click to download resume");
        assert!(replies[1].has_download_action);
    }

    #[test]
    fn test_fixed_single_replies() {
        assert_eq!(replies("education"), vec![Reply::text(EDUCATION)]);
        assert_eq!(
            replies("address"),
            vec![Reply::text("📍 Location:\nParsad, Udaipur, Rajasthan")]
        );
        assert_eq!(replies("contact"), vec![Reply::text(CONTACT)]);
        assert_eq!(replies("projects"), vec![Reply::text(PROJECTS)]);
        assert!(replies("contact")[0].text.contains("darjidikshit30@gmail.com"));
    }

    #[test]
    fn test_clear_resets() {
        assert_eq!(dispatch("clear"), Dispatch::Reset);
        assert_eq!(dispatch("  CLEAR "), Dispatch::Reset);
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(dispatch("SKILLS"), dispatch("skills"));
        assert_eq!(dispatch("  Resume\t"), dispatch("resume"));
        assert_eq!(Keyword::parse(" ProJects "), Some(Keyword::Projects));
    }

    #[test]
    fn test_no_partial_matches() {
        for input in ["skill", "skills please", "more info", "my resume", "clearly", "banana"] {
            assert_eq!(replies(input), vec![Reply::text(FALLBACK)], "{}", input);
            assert_eq!(Keyword::parse(input), None);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  MoRe \n"), "more");
        assert_eq!(normalize(""), "");
    }
}
