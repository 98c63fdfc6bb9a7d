//! HTTP boundary to the remote assistant service.
//!
//! The service contract is a single POST of `{ "message": <text> }` that
//! answers `{ "response": <text> }`. `AssistantBackend` is the seam the
//! request coordinator is tested through.

mod client;

pub use client::{AssistantBackend, ChatError, ChatResult, HttpAssistant};
