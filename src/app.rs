use crate::config::Config;
use crate::conversation::Conversation;
use crate::dispatcher::{self, Dispatch, Keyword, Reply};
use crate::links;
use crate::logging::log_dispatch;
use crate::models::DispatchRecord;
use crate::status_indicator::StatusIndicator;
use chrono::Utc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

/// Something in the conversation the visitor can activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Open(String),
    Download,
}

/// What happened to the text in the input field after Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing changed.
    Ignored,
    /// A reply sequence is still playing; the input was kept.
    Busy,
    /// `clear` restored the greeting.
    Reset,
    /// Replies to play through the typing sequencer.
    Replies(Vec<Reply>),
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub config: Config,
    pub conversation: Conversation,
    pub input: String,
    /// Lines scrolled up from the newest message.
    pub scroll: u16,
    pub status_indicator: StatusIndicator,
    pub focused_action: Option<usize>,
    pub replying: bool,
    pub typing_frame: usize,
}

impl App {
    pub fn new(config: Config) -> App {
        App {
            state: AppState::Chat,
            config,
            conversation: Conversation::new(),
            input: String::new(),
            scroll: 0,
            status_indicator: StatusIndicator::new(),
            focused_action: None,
            replying: false,
            typing_frame: 0,
        }
    }

    /// Handles the text in the input field. Blank input and input sent while
    /// the bot is still typing leave the conversation untouched.
    pub fn submit(&mut self) -> Submission {
        if self.input.trim().is_empty() {
            return Submission::Ignored;
        }
        if self.replying {
            self.status_indicator
                .set_status("Still typing, send again in a moment");
            return Submission::Busy;
        }

        let input = std::mem::take(&mut self.input);
        self.status_indicator.clear_status();
        self.conversation.push_user(input.clone());
        self.scroll = 0;

        let dispatch = dispatcher::dispatch(&input);
        log_dispatch(&DispatchRecord {
            timestamp: Utc::now(),
            input: input.clone(),
            keyword: Keyword::parse(&input).map(|k| k.to_string()),
            reply_count: match &dispatch {
                Dispatch::Replies(replies) => replies.len(),
                Dispatch::Reset => 0,
            },
            reset: dispatch == Dispatch::Reset,
        });

        match dispatch {
            Dispatch::Reset => {
                self.conversation.reset();
                self.focused_action = None;
                Submission::Reset
            }
            Dispatch::Replies(replies) => {
                self.set_replying(true);
                Submission::Replies(replies)
            }
        }
    }

    pub fn set_replying(&mut self, replying: bool) {
        self.replying = replying;
        self.status_indicator.set_typing(replying);
    }

    /// Activatable items of finalized messages in display order, with the
    /// index of the message each belongs to.
    pub fn actions(&self) -> Vec<(usize, Action)> {
        let mut actions = Vec::new();
        for (idx, message) in self.conversation.messages().iter().enumerate() {
            if message.is_typing {
                continue;
            }
            for href in links::hrefs(&message.text) {
                actions.push((idx, Action::Open(href)));
            }
            if message.has_download_action {
                actions.push((idx, Action::Download));
            }
        }
        actions
    }

    pub fn focused(&self) -> Option<(usize, Action)> {
        let focused = self.focused_action?;
        self.actions().into_iter().nth(focused)
    }

    /// Moves focus towards older items, starting from the newest.
    pub fn focus_previous(&mut self) {
        let count = self.actions().len();
        if count == 0 {
            self.focused_action = None;
            return;
        }
        self.focused_action = Some(match self.focused_action {
            Some(idx) if idx > 0 && idx < count => idx - 1,
            _ => count - 1,
        });
    }

    /// Moves focus towards newer items, wrapping to the oldest.
    pub fn focus_next(&mut self) {
        let count = self.actions().len();
        if count == 0 {
            self.focused_action = None;
            return;
        }
        self.focused_action = Some(match self.focused_action {
            Some(idx) if idx + 1 < count => idx + 1,
            _ => 0,
        });
    }

    pub fn clear_focus(&mut self) {
        self.focused_action = None;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn tick(&mut self) {
        self.status_indicator.update_spinner();
        self.typing_frame = self.typing_frame.wrapping_add(1);
    }
}
