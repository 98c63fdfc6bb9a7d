use crate::controller::ChatController;
use crate::theme::theme_definition;
use crate::views::ChatView;
use dioxus::prelude::*;

const APP_CSS: Asset = asset!("/assets/mannmitra.css");

#[component]
pub fn App() -> Element {
    let controller = use_signal(ChatController::from_prefs);

    rsx! {
        ThemeStyles { controller }
        AppHeader { controller }
        ChatView { controller }
        AppFooter {}
    }
}

#[component]
fn ThemeStyles(controller: Signal<ChatController>) -> Element {
    let definition = theme_definition(controller.read().theme_mode());
    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(controller: Signal<ChatController>) -> Element {
    let mut controller = controller;
    let definition = theme_definition(controller.read().theme_mode());
    rsx! {
        div { class: "header",
            div { class: "header-content",
                div { class: "header-titles",
                    h1 { class: "header-wordmark", "🤖 MannMitra" }
                    p { class: "header-subtitle", "Your crop assistant" }
                }
                div { class: "header-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: "Clear chat",
                        onclick: move |_| controller.with_mut(|state| state.clear_conversation()),
                        "Clear"
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        title: definition.toggle_title,
                        onclick: move |_| {
                            controller.with_mut(|state| {
                                state.toggle_dark_mode();
                            });
                        },
                        "{definition.toggle_glyph}"
                    }
                }
            }
        }
    }
}

#[component]
fn AppFooter() -> Element {
    rsx! {
        div { class: "footer",
            p { class: "footer-note",
                "MannMitra uses AI to provide farming insights. Always consult with agricultural experts for critical decisions."
            }
        }
    }
}
