//! Voice input via the webview's speech-recognition capability.
//!
//! The capability is consumed, not implemented: a script started through
//! the document eval bridge drives one Web Speech API session and forwards
//! its lifecycle back as tagged JSON events. One utterance per session,
//! final results only; the platform ends the session on its own.

use serde::Deserialize;

/// Recognition locale for the capture session.
pub const RECOGNITION_LOCALE: &str = "en-US";

/// Blocking notice when the platform has no speech recognition.
pub const UNSUPPORTED_NOTICE: &str =
    "Speech Recognition is not supported in this browser. Try Chrome or Edge for the best experience.";

/// Lifecycle of one capture session, as sent by the recognition script.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VoiceEvent {
    /// No recognition capability on this platform.
    Unsupported,
    /// The platform started listening.
    Start,
    /// The final transcript of the utterance.
    Result { transcript: String },
    /// Recognition failed; the session is over.
    Error { message: Option<String> },
    /// The platform ended the session.
    End,
}

/// JS for a single capture session: feature-detect, configure one
/// non-interim, non-continuous utterance, and forward start/result/
/// error/end. Sends `unsupported` and stops if the capability is absent.
pub fn recognition_script() -> String {
    format!(
        r#"
const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
if (!Recognition) {{
    dioxus.send({{ kind: "unsupported" }});
}} else {{
    const recognition = new Recognition();
    recognition.lang = "{locale}";
    recognition.interimResults = false;
    recognition.continuous = false;

    recognition.onstart = () => dioxus.send({{ kind: "start" }});
    recognition.onerror = (event) => dioxus.send({{ kind: "error", message: String(event.error || "recognition error") }});
    recognition.onend = () => dioxus.send({{ kind: "end" }});
    recognition.onresult = (event) => {{
        const transcript = event.results[0][0].transcript;
        dioxus.send({{ kind: "result", transcript: transcript }});
    }};

    recognition.start();
}}
"#,
        locale = RECOGNITION_LOCALE
    )
}

/// Appends a recognized transcript to the composer text, space-joined
/// when there is already something typed.
pub fn join_transcript(existing: &str, transcript: &str) -> String {
    if existing.is_empty() {
        transcript.to_string()
    } else {
        format!("{existing} {transcript}")
    }
}
