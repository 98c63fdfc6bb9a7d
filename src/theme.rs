use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_glyph: &'static str,
    pub toggle_title: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_glyph: "☀",
            toggle_title: "Switch to light mode",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_glyph: "☾",
            toggle_title: "Switch to dark mode",
        },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #111827;
    --color-bg-secondary: #1f2937;
    --color-bg-panel: rgba(31, 41, 55, 0.9);
    --color-text-primary: #ffffff;
    --color-text-secondary: #d1d5db;
    --color-text-muted: #6b7280;
    --color-border: #374151;
    --color-surface-muted: #374151;
    --color-input-border: #4b5563;
    --color-input-bg: #374151;
    --color-accent: #059669;
    --color-accent-hover: #047857;
    --color-chat-user-bg: #2563eb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #374151;
    --color-chat-assistant-text: #f3f4f6;
    --color-timestamp: #9ca3af;
    --color-listening: #ef4444;
    --color-shimmer-base: rgba(107, 114, 128, 0.35);
    --color-shimmer-highlight: #9ca3af;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-panel); border-color: var(--color-border); }
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ecfdf5;
    --color-bg-secondary: #eff6ff;
    --color-bg-panel: rgba(255, 255, 255, 0.9);
    --color-text-primary: #1f2937;
    --color-text-secondary: #4b5563;
    --color-text-muted: #9ca3af;
    --color-border: #e5e7eb;
    --color-surface-muted: #f3f4f6;
    --color-input-border: #e5e7eb;
    --color-input-bg: #ffffff;
    --color-accent: #10b981;
    --color-accent-hover: #059669;
    --color-chat-user-bg: #3b82f6;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f9fafb;
    --color-chat-assistant-text: #1f2937;
    --color-timestamp: #6b7280;
    --color-listening: #ef4444;
    --color-shimmer-base: rgba(156, 163, 175, 0.35);
    --color-shimmer-highlight: #6b7280;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-panel); border-color: var(--color-border); }
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
"#;
