//! Lossy conversion of puzzle pages into plain text.

use std::sync::LazyLock;

use regex::Regex;

/// Tags which become line breaks, processed in this order.
///
/// Note that the open pattern for `p` also matches `pre`.
const BLOCK_TAGS: [&str; 12] = [
    "p", "div", "article", "section", "h1", "h2", "h3", "h4", "h5", "h6", "li", "br",
];

static SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("SCRIPT: hardcoded regex is valid")
});

static STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("STYLE: hardcoded regex is valid")
});

static BLOCKS: LazyLock<Vec<(Regex, Regex)>> = LazyLock::new(|| {
    BLOCK_TAGS
        .iter()
        .map(|tag| {
            let open = Regex::new(&format!(r"(?i)<{tag}[^>]*>"))
                .expect("BLOCKS: hardcoded regex is valid");
            let close =
                Regex::new(&format!(r"(?i)</{tag}>")).expect("BLOCKS: hardcoded regex is valid");
            (open, close)
        })
        .collect()
});

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:code|pre|em|strong|span|a)[^>]*>")
        .expect("INLINE: hardcoded regex is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG: hardcoded regex is valid"));

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_LINES: hardcoded regex is valid"));

/// Legacy entities which browsers still decode without a trailing semicolon.
static LEGACY_ENTITIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|nbsp|copy|reg)\b;?")
        .expect("LEGACY_ENTITIES: hardcoded regex is valid")
});

/// Convert an HTML document into plain text.
///
/// Scripts and styles are dropped with their content, block elements turn
/// into line breaks, every other tag is removed and entities are decoded.
/// Common entities missing their semicolon, like `&amp B`, are decoded too.
/// Runs of three or more newlines collapse into a single blank line.
pub(crate) fn html_to_text(html: &str) -> String {
    let text = SCRIPT.replace_all(html, "");
    let text = STYLE.replace_all(&text, "");
    let mut text = text.into_owned();

    for (open, close) in BLOCKS.iter() {
        text = open.replace_all(&text, "\n").into_owned();
        text = close.replace_all(&text, "\n").into_owned();
    }

    let text = INLINE.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");
    let text = LEGACY_ENTITIES.replace_all(&text, "&${1};");
    let text = html_escape::decode_html_entities(&text);
    BLANK_LINES.replace_all(&text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::html_to_text;

    #[test]
    fn test_block_tags() {
        let text = html_to_text("<p>A</p><p>B</p>");
        assert_eq!(text, "\nA\n\nB\n");

        let text = html_to_text("<H2 class=\"x\">Title</H2>one<br/>two");
        assert_eq!(text, "\nTitle\none\ntwo");

        let text = html_to_text("<ul><li>a</li><li>b</li></ul>");
        assert_eq!(text, "\na\n\nb\n");
    }

    #[test]
    fn test_strip_tags() {
        let text = html_to_text("Say <em>hello</em> to <a href=\"/x\">this</a><table><tr>!</tr></table>");
        assert_eq!(text, "Say hello to this!");

        // `<pre>` opens a line via the paragraph pattern.
        let text = html_to_text("<pre><code>1 2\n3 4</code></pre>");
        assert_eq!(text, "\n1 2\n3 4");
    }

    #[test]
    fn test_script_and_style() {
        let text = html_to_text(
            "a<SCRIPT type=\"x\">var x = 1;\n<p>no</p></script>b<style>\np { color: red; }\n</style>c",
        );
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_entities() {
        assert_eq!(html_to_text("A &amp; B"), "A & B");
        assert_eq!(html_to_text("&lt;x&gt; &quot;y&quot; &#39;z&#39;"), "<x> \"y\" 'z'");
    }

    #[test]
    fn test_entities_without_semicolon() {
        assert_eq!(html_to_text("A &amp B"), "A & B");
        assert_eq!(html_to_text("&lt;&gt"), "<>");
        assert_eq!(html_to_text("&amp;lt; &ampere"), "&lt; &ampere");
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(html_to_text("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(html_to_text("a\n\nb"), "a\n\nb");
        assert_eq!(html_to_text("<div><p>a</p></div><div>b</div>"), "\n\na\n\nb\n");
    }
}
