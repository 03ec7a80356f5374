//! Snippet sanitization for news-search results
//!
//! The news API wraps query matches in inline emphasis tags and escapes a
//! handful of characters as HTML entities. Both are stripped/decoded before
//! a snippet reaches the rendering layer, so markup can never leak into the
//! dashboard. Everything else, including all Unicode text, passes through
//! untouched.

use regex::Regex;
use std::sync::LazyLock;

// The API only ever emits this fixed set of emphasis tags.
static EMPHASIS_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(?:b|strong|em)>").unwrap());

/// Sanitize one snippet field (title or description)
///
/// # Examples
///
/// ```
/// use mulgyeol::sanitize::sanitize;
///
/// assert_eq!(sanitize("<b>Apple</b> unveils <b>iPhone</b>"), "Apple unveils iPhone");
/// ```
pub fn sanitize(text: &str) -> String {
    let stripped = strip_emphasis_tags(text);
    decode_entities(&stripped)
}

/// Remove the emphasis tags the news API uses to highlight query matches
pub fn strip_emphasis_tags(text: &str) -> String {
    EMPHASIS_TAG_REGEX.replace_all(text, "").into_owned()
}

/// Decode the HTML entities the news API escapes snippets with
///
/// Decodes:
/// - &quot; -> "
/// - &amp; -> &
/// - &lt; -> <
/// - &gt; -> >
/// - &#39; / &apos; -> '
pub fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bold_tags() {
        assert_eq!(
            sanitize("<b>Apple</b> unveils <b>iPhone</b>"),
            "Apple unveils iPhone"
        );
    }

    #[test]
    fn test_strips_strong_and_em() {
        assert_eq!(
            sanitize("<strong>삼성</strong>전자 <em>실적</em>"),
            "삼성전자 실적"
        );
    }

    #[test]
    fn test_unmatched_close_tag_removed() {
        assert_eq!(sanitize("broken</b> markup"), "broken markup");
    }

    #[test]
    fn test_other_tags_untouched() {
        // Only the fixed emphasis set is stripped; anything else is content.
        assert_eq!(sanitize("<i>italic</i>"), "<i>italic</i>");
        assert_eq!(sanitize("a < b and b > a"), "a < b and b > a");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(
            sanitize("&quot;갤럭시&quot; &amp; 아이폰"),
            "\"갤럭시\" & 아이폰"
        );
        assert_eq!(sanitize("&lt;b&gt;"), "<b>");
        assert_eq!(sanitize("it&#39;s"), "it's");
    }

    #[test]
    fn test_unicode_untouched() {
        let text = "무선이어폰 판매량 급증 📈";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_tags_inside_korean_text() {
        assert_eq!(
            sanitize("<b>폴더블폰</b> 출시 임박"),
            "폴더블폰 출시 임박"
        );
    }
}
