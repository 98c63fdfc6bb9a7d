//! Integration tests for the submit/settle lifecycle, driven through
//! scripted assistant backends instead of the network.

use async_trait::async_trait;
use mannmitra::assistant::{AssistantBackend, ChatResult};
use mannmitra::controller::{ChatController, SERVER_ERROR_NOTICE};
use mannmitra::types::Role;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Script {
    Reply(&'static str),
    Failure,
}

struct ScriptedAssistant {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedAssistant {
    fn replying(text: &'static str) -> Self {
        Self {
            script: Script::Reply(text),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            script: Script::Failure,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssistantBackend for ScriptedAssistant {
    async fn reply(&self, _message: &str) -> ChatResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Script::Reply(text) => Ok(text.to_string()),
            Script::Failure => Err(serde_json::from_str::<serde_json::Value>("garbage")
                .unwrap_err()
                .into()),
        }
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn user_message_is_appended_before_any_network_call() {
        let mut controller = ChatController::new();
        let backend = ScriptedAssistant::replying("ok");

        let outbound = controller.begin_submit("what should I plant?");
        assert_eq!(outbound.as_deref(), Some("what should I plant?"));
        assert_eq!(controller.message_count(), 1);
        assert_eq!(controller.messages()[0].role, Role::User);
        assert_eq!(controller.messages()[0].text, "what should I plant?");
        assert_eq!(backend.calls(), 0, "no call may start before the append");

        controller.complete_submit(backend.reply(&outbound.unwrap()).await);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_rejected() {
        let mut controller = ChatController::new();
        let backend = ScriptedAssistant::replying("ok");

        controller.begin_submit("first").unwrap();
        let len_before = controller.message_count();

        let issued = controller.submit(&backend, "second").await;
        assert!(!issued);
        assert_eq!(controller.message_count(), len_before);
        assert_eq!(backend.calls(), 0, "rejected submit must not reach the network");
    }

    #[tokio::test]
    async fn successful_settlement_appends_user_then_assistant() {
        let mut controller = ChatController::new();
        let backend = ScriptedAssistant::replying("Plant tomatoes in well-drained soil.");

        let issued = controller.submit(&backend, "what grows here?").await;
        assert!(issued);
        assert_eq!(backend.calls(), 1);
        assert!(!controller.is_busy());

        let messages = controller.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].text, "what grows here?");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].text, "Plant tomatoes in well-drained soil.");
    }

    #[tokio::test]
    async fn failed_settlement_appends_fixed_warning_and_releases_busy() {
        let mut controller = ChatController::new();
        let backend = ScriptedAssistant::failing();

        controller.submit(&backend, "what grows here?").await;

        assert!(!controller.is_busy());
        let messages = controller.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].text, SERVER_ERROR_NOTICE);
    }

    #[tokio::test]
    async fn whitespace_only_input_never_reaches_the_network() {
        let mut controller = ChatController::new();
        let backend = ScriptedAssistant::replying("ok");

        let issued = controller.submit(&backend, "   ").await;
        assert!(!issued);
        assert!(controller.messages().is_empty());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn controller_is_idle_again_after_each_settlement() {
        let mut controller = ChatController::new();
        let ok = ScriptedAssistant::replying("fine");
        let bad = ScriptedAssistant::failing();

        controller.submit(&ok, "one").await;
        assert!(!controller.is_busy());

        controller.submit(&bad, "two").await;
        assert!(!controller.is_busy());

        // A new submission is accepted once the previous one settled.
        assert!(controller.submit(&ok, "three").await);
        assert_eq!(controller.message_count(), 6);
    }
}

mod clear_tests {
    use super::*;

    #[tokio::test]
    async fn clear_empties_regardless_of_contents_and_is_idempotent() {
        let mut controller = ChatController::new();
        let backend = ScriptedAssistant::replying("ok");
        controller.submit(&backend, "hello").await;
        assert_eq!(controller.message_count(), 2);

        controller.clear_conversation();
        assert!(controller.messages().is_empty());

        controller.clear_conversation();
        assert!(controller.messages().is_empty());
    }
}
