use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_text_as_paragraph() {
        let html = markdown_to_html("water the field");
        assert!(html.contains("<p>water the field</p>"));
    }

    #[test]
    fn preserves_line_breaks_as_separate_blocks() {
        let html = markdown_to_html("first\n\nsecond");
        assert!(html.contains("<p>first</p>"));
        assert!(html.contains("<p>second</p>"));
    }
}
