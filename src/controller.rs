use crate::assistant::{AssistantBackend, ChatResult};
use crate::conversation::Conversation;
use crate::prefs;
use crate::types::{Message, Role, ThemeMode};

/// Shown in place of a reply when the request settles with any failure.
/// Causes are not distinguished to the user.
pub const SERVER_ERROR_NOTICE: &str = "⚠️ Server error. Please try again later.";

/// Top-level application state: the conversation, the in-flight flag, and
/// the persisted dark-mode preference. Constructed once and threaded
/// through the view layer.
///
/// Submission is a two-step state machine so the view can run the network
/// call off the UI callback: `begin_submit` (Idle → Pending) and
/// `complete_submit` (Pending → Idle). At most one request is in flight;
/// a submit while pending is rejected, not queued.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatController {
    conversation: Conversation,
    busy: bool,
    dark_mode: bool,
}

impl ChatController {
    pub fn new() -> Self {
        Self {
            conversation: Conversation::new(),
            busy: false,
            dark_mode: false,
        }
    }

    /// Startup constructor: dark mode comes from the preference store.
    pub fn from_prefs() -> Self {
        Self {
            dark_mode: prefs::load_dark_mode(),
            ..Self::new()
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn message_count(&self) -> usize {
        self.conversation.len()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Validates and stages a submission. Blank input and submit-while-
    /// pending are silent no-ops. On acceptance the user message is
    /// appended immediately (before any network activity) with its raw
    /// untrimmed text, and that text is returned for the outbound call.
    pub fn begin_submit(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.busy {
            return None;
        }
        self.conversation.append(Message::new(Role::User, text));
        self.busy = true;
        Some(text.to_string())
    }

    /// Settles the pending request. Failures are swallowed into a fixed
    /// in-conversation notice. The busy flag is released on every path.
    pub fn complete_submit(&mut self, result: ChatResult<String>) {
        let text = match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("assistant request failed: {err}");
                SERVER_ERROR_NOTICE.to_string()
            }
        };
        self.conversation.append(Message::new(Role::Assistant, text));
        self.busy = false;
    }

    /// Full submit path: stage, call the backend, settle. Returns whether
    /// a request was actually issued.
    pub async fn submit<B: AssistantBackend + ?Sized>(&mut self, backend: &B, text: &str) -> bool {
        let Some(outbound) = self.begin_submit(text) else {
            return false;
        };
        let result = backend.reply(&outbound).await;
        self.complete_submit(result);
        true
    }

    pub fn clear_conversation(&mut self) {
        self.conversation.clear();
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme_mode(&self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Flips the preference and writes it through immediately.
    pub fn toggle_dark_mode(&mut self) -> ThemeMode {
        self.dark_mode = !self.dark_mode;
        prefs::store_dark_mode(self.dark_mode);
        self.theme_mode()
    }
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new()
    }
}
