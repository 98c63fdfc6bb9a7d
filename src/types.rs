use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub sent_at: Option<String>,
}

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at: display_timestamp(),
        }
    }
}

fn display_timestamp() -> Option<String> {
    let mut now = OffsetDateTime::now_utc();
    if let Ok(offset) = UtcOffset::current_local_offset() {
        now = now.to_offset(offset);
    }
    now.format(MESSAGE_TIME_FORMAT).ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_keeps_raw_text() {
        let msg = Message::new(Role::User, "  needs water?\nurgent  ");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "  needs water?\nurgent  ");
    }

    #[test]
    fn timestamp_is_clock_shaped() {
        let msg = Message::new(Role::Assistant, "hello");
        if let Some(ts) = msg.sent_at {
            // e.g. "09:41 AM"
            assert!(ts.ends_with("AM") || ts.ends_with("PM"), "unexpected timestamp: {ts}");
            assert!(ts.contains(':'));
        }
    }
}
