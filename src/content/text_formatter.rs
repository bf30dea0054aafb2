use lazy_static::lazy_static;
use quick_xml::escape::escape;
use regex::{Captures, Regex};
use reqwest::Url;

use crate::content::{Content, FormattedBody};

/// Left at the end of some bodies by the CMS editor.
const EDITOR_ARTIFACT: &str = "Drag";
const LINK_CLASS: &str = "text-blue-600 hover:underline";

lazy_static! {
    static ref BOLD_REGEX: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap();
}

fn strip_artifact(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_suffix(EDITOR_ARTIFACT) {
        Some(stripped) => stripped.trim_end(),
        None => trimmed,
    }
}

/// Relative targets and web or mail links only.
fn is_safe_target(target: &str) -> bool {
    match Url::parse(target) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "mailto"),
        Err(_) => true,
    }
}

fn format_with(text: &str, allow_target: fn(&str) -> bool) -> String {
    let text = strip_artifact(text);
    let text = BOLD_REGEX.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC_REGEX.replace_all(&text, "<em>$1</em>");
    LINK_REGEX.replace_all(&text, |caps: &Captures| {
        if allow_target(&caps[2]) {
            format!(r#"<a href="{}" class="{}">{}</a>"#, &caps[2], LINK_CLASS, &caps[1])
        } else {
            caps[0].to_string()
        }
    }).into_owned()
}

/// Turns `**bold**`, `*italic*` and `[label](url)` into HTML.
///
/// Bold has to be replaced before italic, otherwise `**x**` would be read as two italics.
pub fn format(text: &str) -> String {
    format_with(text, |_| true)
}

/// Block text is literal, so it is escaped before formatting and links to other schemes stay as text.
pub fn format_literal(text: &str) -> String {
    format_with(&escape(text), is_safe_target)
}

pub fn format_content(content: &Content) -> FormattedBody {
    match content {
        Content::Plain(markup) => FormattedBody::Markup(format(markup)),
        Content::Blocks(blocks) => FormattedBody::Paragraphs(
            Content::paragraphs(blocks)
                .map(|text| format_literal(&text))
                .collect()
        ),
        Content::Unsupported => FormattedBody::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use crate::content::Block;

    use super::*;

    #[test]
    fn test_format_all_passes() {
        let res = format("**a** *b* [c](d)");
        assert_eq!(res, r#"<strong>a</strong> <em>b</em> <a href="d" class="text-blue-600 hover:underline">c</a>"#);
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(format("**bold** and *it*"), "<strong>bold</strong> and <em>it</em>");
        assert_eq!(format("*only italic*"), "<em>only italic</em>");
        assert_eq!(format("a * b"), "a * b");
    }

    #[test]
    fn test_link_with_formatted_label() {
        assert_eq!(
            format("see [**docs**](https://example.com/docs)"),
            r#"see <a href="https://example.com/docs" class="text-blue-600 hover:underline"><strong>docs</strong></a>"#
        );
        assert_eq!(format("[broken](no close"), "[broken](no close");
    }

    #[test]
    fn test_strip_artifact() {
        assert_eq!(format("Some text Drag"), "Some text");
        assert_eq!(format("Some text\nDrag  \n"), "Some text");
        assert_eq!(format("Drag and drop"), "Drag and drop");
        assert_eq!(format("Drag"), "");
        assert_eq!(format("  plain  "), "plain");
    }

    #[test]
    fn test_format_is_stable() {
        let input = "**x** [y](z) Drag";
        assert_eq!(format(input), format(input));
    }

    #[test]
    fn test_format_literal_escapes() {
        assert_eq!(format_literal("<b>x</b> **y**"), "&lt;b&gt;x&lt;/b&gt; <strong>y</strong>");
    }

    #[test]
    fn test_format_content() {
        let plain = Content::Plain("<p>**hi**</p>".to_string());
        assert_eq!(format_content(&plain), FormattedBody::Markup("<p><strong>hi</strong></p>".to_string()));

        let blocks = Content::Blocks(vec![
            Block::paragraph(&["Hello ", "*there*"]),
            Block { kind: "image".to_string(), children: vec![] },
            Block::paragraph(&["a < b"]),
        ]);
        assert_eq!(format_content(&blocks), FormattedBody::Paragraphs(vec![
            "Hello <em>there</em>".to_string(),
            "a &lt; b".to_string(),
        ]));

        assert_eq!(format_content(&Content::Unsupported), FormattedBody::Unsupported);
    }

    #[test]
    fn test_format_literal_link_targets() {
        assert_eq!(format_literal("[click](javascript:alert`1`)"), "[click](javascript:alert`1`)");
        assert_eq!(format_literal("[x](JavaScript:void(0))"), "[x](JavaScript:void(0))");
        assert_eq!(format_literal("[x](data:text/html,hi)"), "[x](data:text/html,hi)");
        assert_eq!(
            format_literal("[site](https://example.com)"),
            r#"<a href="https://example.com" class="text-blue-600 hover:underline">site</a>"#
        );
        assert_eq!(
            format_literal("[mail](mailto:ada@example.com)"),
            r#"<a href="mailto:ada@example.com" class="text-blue-600 hover:underline">mail</a>"#
        );
        assert_eq!(
            format_literal("[next](/blog/next-post)"),
            r#"<a href="/blog/next-post" class="text-blue-600 hover:underline">next</a>"#
        );
    }
}
