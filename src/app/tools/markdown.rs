//! Markdown rendering for the preview panel.
//!
//! Fenced code blocks are pulled out of the event stream and replaced with
//! syntect-highlighted HTML; everything else goes through pulldown-cmark
//! untouched.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::escape_html;

pub const PANEL_ID: &str = "markdownOutput";

const HIGHLIGHT_THEME: &str = "InspiredGitHub";

pub struct Renderer {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Renderer {
    /// Load the bundled syntax and theme definitions. Built once at startup;
    /// the sets are too heavy to rebuild per keystroke.
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let mut themes = ThemeSet::load_defaults();
        let theme = themes.themes.remove(HIGHLIGHT_THEME).unwrap_or_default();
        Self { syntaxes, theme }
    }

    /// Render markdown text to HTML, tables and strikethrough enabled.
    pub fn render(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let mut events = Vec::new();
        let mut code_block: Option<(String, String)> = None;

        for event in Parser::new_ext(text, options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(token) => token.trim().to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, source)) = code_block.take() {
                        events.push(Event::Html(self.highlight(&lang, &source).into()));
                    }
                }
                Event::Text(chunk) => match &mut code_block {
                    Some((_, source)) => source.push_str(&chunk),
                    None => events.push(Event::Text(chunk)),
                },
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    /// Highlight one code block. Unknown languages render as plain text;
    /// a highlighter failure falls back to the escaped source.
    fn highlight(&self, lang: &str, source: &str) -> String {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());
        highlighted_html_for_string(source, &self.syntaxes, syntax, &self.theme)
            .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>\n", escape_html(source)))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
