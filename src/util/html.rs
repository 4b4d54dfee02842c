//! Terminal rendering of the HTML carried in FAQ answers.
//!
//! Answers are trusted, pre-sanitized HTML. The terminal cannot show markup,
//! so the fragment is parsed with `scraper` and its tree is walked: block-level
//! elements become line breaks, list items get a bullet, comments and hidden
//! elements are skipped. This is a display transform only; nothing here
//! validates or sanitizes the markup.

use super::strip_control_chars;
use scraper::{ElementRef, Html, Node};

/// Elements that start and end a line.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "dd", "div", "dl", "dt", "footer", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "li", "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Void elements that only break the line.
const BREAK_TAGS: &[&str] = &["br", "hr"];

/// Elements whose text content is never shown.
const HIDDEN_TAGS: &[&str] = &["script", "style", "head", "title", "template"];

/// Convert an HTML fragment into display lines.
///
/// Runs of whitespace collapse to one space, blank lines collapse to one, and
/// leading/trailing blank lines are removed.
pub fn html_to_lines(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let text = flatten(fragment.root_element());
    let clean = strip_control_chars(&text);

    let mut lines: Vec<String> = Vec::new();
    for raw in clean.split('\n') {
        let line = collapse_whitespace(raw);
        if line.is_empty() && lines.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Walk the tree depth-first, emitting text and `\n` at block boundaries.
///
/// Uses an explicit stack so deeply nested markup cannot exhaust the call stack.
fn flatten(root: ElementRef<'_>) -> String {
    let mut text = String::new();
    // (node, whether its children have already been pushed)
    let mut stack = vec![(*root, false)];

    while let Some((node, closing)) = stack.pop() {
        match node.value() {
            Node::Text(t) => push_text(&mut text, t),
            Node::Element(el) => {
                let name = el.name();
                if closing {
                    if BLOCK_TAGS.contains(&name) {
                        text.push('\n');
                    }
                    continue;
                }
                if HIDDEN_TAGS.contains(&name) {
                    continue;
                }
                if BREAK_TAGS.contains(&name) || BLOCK_TAGS.contains(&name) {
                    text.push('\n');
                }
                if name == "li" {
                    text.push_str("• ");
                }

                stack.push((node, true));
                let children: Vec<_> = node.children().collect();
                stack.extend(children.into_iter().rev().map(|child| (child, false)));
            }
            // Comments, doctypes and processing instructions
            _ => {}
        }
    }
    text
}

/// Source newlines are ordinary whitespace in HTML.
fn push_text(out: &mut String, s: &str) {
    out.extend(s.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_lines("Cards only"), vec!["Cards only"]);
    }

    #[test]
    fn test_paragraphs_and_breaks() {
        let html = "<p>First line<br>second line</p><p>Next paragraph</p>";
        assert_eq!(
            html_to_lines(html),
            vec!["First line", "second line", "", "Next paragraph"]
        );
    }

    #[test]
    fn test_inline_tags_dropped() {
        assert_eq!(
            html_to_lines("Use the <b>Account</b> <a href=\"/me\">page</a>."),
            vec!["Use the Account page."]
        );
    }

    #[test]
    fn test_list_items_get_bullets() {
        let html = "<ul><li>One</li><li>Two</li></ul>";
        assert_eq!(html_to_lines(html), vec!["• One", "", "• Two"]);
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            html_to_lines("Fish &amp; chips &lt;3 &#39;yes&#x27; &nbsp;ok &hellip;"),
            vec!["Fish & chips <3 'yes' ok …"]
        );
    }

    #[test]
    fn test_unknown_entity_kept() {
        assert_eq!(html_to_lines("A &bogus; B & C"), vec!["A &bogus; B & C"]);
    }

    #[test]
    fn test_script_and_style_hidden() {
        let html = "<style>p{color:red}</style>Visible<script>if (a < b) {}</script>";
        assert_eq!(html_to_lines(html), vec!["Visible"]);
    }

    #[test]
    fn test_comment_with_angle_bracket_dropped() {
        assert_eq!(
            html_to_lines("<p>Before<!-- editor note: a > b --> after</p>"),
            vec!["Before after"]
        );
    }

    #[test]
    fn test_quoted_attribute_with_angle_bracket() {
        assert_eq!(html_to_lines("<a title=\"x > y\">link</a>"), vec!["link"]);
        assert_eq!(
            html_to_lines("<span data-rule='a>b'>Fee</span> waived"),
            vec!["Fee waived"]
        );
    }

    #[test]
    fn test_source_newlines_are_whitespace() {
        assert_eq!(html_to_lines("a\n   b\r\nc"), vec!["a b c"]);
    }

    #[test]
    fn test_stray_less_than_shown_as_text() {
        assert_eq!(html_to_lines("5 <3 and more"), vec!["5 <3 and more"]);
    }

    #[test]
    fn test_control_chars_removed() {
        assert_eq!(html_to_lines("<p>\x1b[31mred\x1b[0m</p>"), vec!["red"]);
    }

    #[test]
    fn test_deep_nesting() {
        let html = format!("{}deep{}", "<div>".repeat(5_000), "</div>".repeat(5_000));
        assert_eq!(html_to_lines(&html), vec!["deep"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(html_to_lines("").is_empty());
        assert!(html_to_lines("<p></p><br/>").is_empty());
    }
}
