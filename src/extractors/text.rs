//! Pure text-cleaning and numeric normalization helpers.

use scraper::{ElementRef, Node};

/// Flatten an element to plain text.
///
/// Walks the subtree in document order: each text node's trimmed content
/// is joined with a single space, element children are recursed into,
/// comment nodes contribute nothing.
pub fn flatten_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let piece = text.text.trim();
                if !piece.is_empty() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(piece);
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            // Comment nodes (and doctypes etc.) carry no visible text.
            _ => {}
        }
    }
}

/// Parse a human-formatted count: every non-digit character is stripped
/// (thousands separators, currency symbols, whitespace) and the rest is
/// read base 10. Empty or fully non-digit input is 0.
pub fn clean_int(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse the aggregate score, normalizing a locale comma decimal
/// separator to a dot first. Unparseable or absent text is 0.0.
pub fn parse_score(raw: &str) -> f64 {
    raw.trim().replace(',', ".").parse().unwrap_or(0.0)
}

/// Drop the query string, keeping everything before the first `?`.
pub fn strip_query(url: &str) -> &str {
    match url.split_once('?') {
        Some((base, _)) => base,
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn fragment(html: &str) -> Html {
        Html::parse_fragment(html)
    }

    fn div_of(doc: &Html) -> ElementRef<'_> {
        let selector = Selector::parse("div").unwrap();
        doc.select(&selector).next().unwrap()
    }

    #[test]
    fn flattens_nested_elements_with_single_spaces() {
        let doc = fragment("<div>  Hello <b>big</b> <i>world</i>  </div>");
        assert_eq!(flatten_text(div_of(&doc)), "Hello big world");
    }

    #[test]
    fn flatten_skips_comment_nodes() {
        let doc = fragment("<div>before<!-- hidden note --><span>after</span></div>");
        assert_eq!(flatten_text(div_of(&doc)), "before after");
    }

    #[test]
    fn flatten_drops_whitespace_only_text_nodes() {
        let doc = fragment("<div><b>a</b>   <i>b</i></div>");
        assert_eq!(flatten_text(div_of(&doc)), "a b");
    }

    #[test]
    fn flatten_of_empty_element_is_empty() {
        let doc = fragment("<div></div>");
        assert_eq!(flatten_text(div_of(&doc)), "");
    }

    #[test]
    fn clean_int_strips_thousands_separators() {
        assert_eq!(clean_int("1,234,567"), 1_234_567);
        assert_eq!(clean_int("10,000+"), 10_000);
        assert_eq!(clean_int(" 42 "), 42);
    }

    #[test]
    fn clean_int_defaults_to_zero() {
        assert_eq!(clean_int(""), 0);
        assert_eq!(clean_int("abc"), 0);
        assert_eq!(clean_int("-"), 0);
    }

    #[test]
    fn clean_int_overflow_is_zero() {
        assert_eq!(clean_int("99999999999999999999999999"), 0);
    }

    #[test]
    fn parse_score_handles_locale_comma() {
        assert_eq!(parse_score("4.5"), 4.5);
        assert_eq!(parse_score("4,5"), 4.5);
        assert_eq!(parse_score(" 3.0 "), 3.0);
    }

    #[test]
    fn parse_score_unparseable_is_zero() {
        assert_eq!(parse_score(""), 0.0);
        assert_eq!(parse_score("n/a"), 0.0);
    }

    #[test]
    fn strip_query_keeps_first_segment() {
        assert_eq!(
            strip_query("https://x/video?vid=abc&t=1"),
            "https://x/video"
        );
        assert_eq!(strip_query("https://x/video"), "https://x/video");
    }
}
