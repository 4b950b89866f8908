// src/models.rs

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Bot,
    User,
}

/// Delivery ticks shown next to user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Read,
}

/// Represents one entry in the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
    pub is_typing: bool,
    pub has_download_action: bool,
    pub delivery_status: Option<DeliveryStatus>,
}

impl Message {
    /// A finalized bot message stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: current_time(),
            is_typing: false,
            has_download_action: false,
            delivery_status: None,
        }
    }

    /// A user message. There is no delivery network, so it is read immediately.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: current_time(),
            is_typing: false,
            has_download_action: false,
            delivery_status: Some(DeliveryStatus::Read),
        }
    }

    /// The "bot is composing" placeholder.
    pub fn typing_placeholder() -> Self {
        Self {
            text: String::new(),
            sender: Sender::Bot,
            timestamp: String::new(),
            is_typing: true,
            has_download_action: false,
            delivery_status: None,
        }
    }

    pub fn with_download_action(mut self, has_download_action: bool) -> Self {
        self.has_download_action = has_download_action;
        self
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Formats a time the way chat apps print it: `1:05 pm`, `12:00 am`.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%-I:%M %P").to_string()
}

pub fn current_time() -> String {
    format_timestamp(&Local::now())
}

/// Logs details of each handled submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct DispatchRecord {
    pub timestamp: DateTime<Utc>,
    pub input: String,
    pub keyword: Option<String>,
    pub reply_count: usize,
    pub reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(&at(13, 5)), "1:05 pm");
        assert_eq!(format_timestamp(&at(0, 7)), "12:07 am");
        assert_eq!(format_timestamp(&at(12, 30)), "12:30 pm");
        assert_eq!(format_timestamp(&at(9, 0)), "9:00 am");
        assert_eq!(format_timestamp(&at(23, 59)), "11:59 pm");
    }

    #[test]
    fn test_user_message_is_read_on_creation() {
        let msg = Message::user("skills");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.delivery_status, Some(DeliveryStatus::Read));
        assert!(!msg.is_typing);
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_bot_message_has_no_delivery_status() {
        let msg = Message::bot("hello");
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.delivery_status, None);
        assert!(!msg.has_download_action);
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_placeholder() {
        let msg = Message::typing_placeholder();
        assert!(msg.is_typing);
        assert!(msg.text.is_empty());
        assert!(msg.timestamp.is_empty());
    }
}
