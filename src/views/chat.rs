use crate::assistant::{AssistantBackend, HttpAssistant};
use crate::controller::ChatController;
use crate::types::{Message, Role};
use crate::views::shared::markdown_to_html;
use crate::voice::{self, VoiceEvent};
use dioxus::events::{Key, MouseEvent};
use dioxus::prelude::*;

fn scroll_to_latest() {
    let _ = document::eval(
        "const list = document.getElementById('chat-list'); if (list) { list.scrollTop = list.scrollHeight; }",
    );
}

fn focus_composer() {
    let _ = document::eval(
        "const field = document.getElementById('chat-input'); if (field) { field.focus(); }",
    );
}

#[component]
pub fn ChatView(controller: Signal<ChatController>) -> Element {
    let mut input = use_signal(String::new);
    let listening = use_signal(|| false);

    let mut send_message = {
        let mut controller = controller;
        let mut input_signal = input;
        move |text: String| {
            // Rejected submissions (blank, already pending) leave the input alone.
            let Some(outbound) = controller.with_mut(|state| state.begin_submit(&text)) else {
                return;
            };
            input_signal.set(String::new());
            scroll_to_latest();
            spawn(async move {
                let assistant = HttpAssistant::from_env();
                let result = assistant.reply(&outbound).await;
                controller.with_mut(|state| state.complete_submit(result));
                scroll_to_latest();
            });
        }
    };

    let start_listening = {
        let mut listening = listening;
        let mut input_signal = input;
        let controller = controller;
        move |_: MouseEvent| {
            if listening() || controller.read().is_busy() {
                return;
            }
            spawn(async move {
                let mut session = document::eval(&voice::recognition_script());
                loop {
                    let Ok(event) = session.recv::<VoiceEvent>().await else {
                        listening.set(false);
                        break;
                    };
                    match event {
                        VoiceEvent::Unsupported => {
                            listening.set(false);
                            let notice = serde_json::json!(voice::UNSUPPORTED_NOTICE);
                            let _ = document::eval(&format!("alert({notice});"));
                            break;
                        }
                        VoiceEvent::Start => listening.set(true),
                        VoiceEvent::Result { transcript } => {
                            input_signal.with_mut(|existing| {
                                let joined = voice::join_transcript(existing, &transcript);
                                *existing = joined;
                            });
                            listening.set(false);
                            focus_composer();
                        }
                        VoiceEvent::Error { message } => {
                            tracing::warn!(
                                "speech recognition failed: {}",
                                message.as_deref().unwrap_or("unknown")
                            );
                            listening.set(false);
                        }
                        VoiceEvent::End => {
                            listening.set(false);
                            break;
                        }
                    }
                }
            });
        }
    };

    let messages_snapshot = controller.read().messages().to_vec();
    let busy = controller.read().is_busy();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for msg in messages_snapshot.iter() {
                        MessageRow { message: msg.clone() }
                    }
                    if busy {
                        PendingRow {}
                    }
                }
            }

            form { class: "composer",
                div { class: "composer-inner",
                    button {
                        class: format_args!("btn mic-btn {}", if listening() { "listening" } else { "" }),
                        r#type: "button",
                        title: if listening() { "Listening..." } else { "Click to speak" },
                        aria_label: "Voice Input",
                        disabled: busy,
                        onclick: start_listening,
                        if listening() { "🎙" } else { "🎤" }
                    }
                    textarea {
                        id: "chat-input",
                        rows: "1",
                        placeholder: "Type your message here...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                send_message(text);
                            }
                        },
                        disabled: busy,
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        title: "Send message",
                        disabled: busy || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            send_message(text);
                        },
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: Message) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    let content_html = match message.role {
        Role::Assistant => markdown_to_html(&message.text),
        Role::User => String::new(),
    };
    rsx! {
        div { class: format_args!("message-row {}", role_class),
            div { class: format_args!("avatar {}", role_class),
                if matches!(message.role, Role::Assistant) { "🤖" } else { "🧑" }
            }
            div { class: "message-stack",
                div { class: format_args!("bubble {}", role_class),
                    if matches!(message.role, Role::Assistant) {
                        div { class: "md", dangerous_inner_html: "{content_html}" }
                    } else {
                        "{message.text}"
                    }
                }
                if let Some(ts) = message.sent_at.clone() {
                    div { class: format_args!(
                            "message-meta {}",
                            match message.role { Role::User => "align-end", Role::Assistant => "align-start" }
                        ),
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
        }
    }
}

#[component]
fn PendingRow() -> Element {
    rsx! {
        div { class: "message-row assistant",
            div { class: "avatar assistant", "🤖" }
            div { class: "message-stack",
                div { class: "shimmer-line",
                    span { class: "shimmer-text", "Thinking…" }
                }
            }
        }
    }
}
