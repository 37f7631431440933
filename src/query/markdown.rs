/// Rewrite plaintext answer sections as Markdown.
///
/// Each line is classified independently; the first matching rule wins:
///
/// 1. empty lines pass through
/// 2. section labels like `Result:` become `## Result`
/// 3. `image: <url>` becomes `![result](<url>)`
/// 4. `key | value` becomes `**key** | value` (split at the first separator)
/// 5. anything else passes through
use std::sync::OnceLock;

use regex::Regex;

/// Letters and ASCII whitespace only, starting with a capital, ending in one colon.
const SECTION_PATTERN: &str = r"^([A-Z][A-Za-z \t\r\f]+):$";
const IMAGE_PATTERN: &str = r"^image:[ \t\r\f]*(https?://[^ \t\n\r\f]+)";
const IMAGE_ALT_TEXT: &str = "result";
const PAIR_SEPARATOR: &str = " | ";

static SECTION_REGEX: OnceLock<Regex> = OnceLock::new();
static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn section_regex() -> &'static Regex {
    SECTION_REGEX.get_or_init(|| Regex::new(SECTION_PATTERN).expect("valid regex pattern"))
}

fn image_regex() -> &'static Regex {
    IMAGE_REGEX.get_or_init(|| Regex::new(IMAGE_PATTERN).expect("valid regex pattern"))
}

/// Format a sanitized answer as Markdown, one output line per input line.
#[must_use]
pub fn format_markdown(text: &str) -> String {
    text.split('\n')
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply the first matching rule to a single line.
#[must_use]
pub fn format_line(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    if let Some(caps) = section_regex().captures(line) {
        return format!("## {}", &caps[1]);
    }

    if let Some(caps) = image_regex().captures(line) {
        return format!("![{IMAGE_ALT_TEXT}]({})", &caps[1]);
    }

    if let Some((key, value)) = line.split_once(PAIR_SEPARATOR) {
        let key = key.trim();
        if !key.is_empty() {
            return format!("**{key}**{PAIR_SEPARATOR}{value}");
        }
    }

    line.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_header() {
        assert_eq!(format_line("Result:"), "## Result");
        assert_eq!(format_line("Decimal approximation:"), "## Decimal approximation");
    }

    #[test]
    fn test_section_header_rejects_non_letters() {
        for line in [
            "Input: 2 + 2",
            "Step 1:",
            "Result (approx):",
            "x = y:",
            "Input/output:",
            "result:",
            "A:",
            "Result: ",
            "Result::",
        ] {
            assert_eq!(format_line(line), line, "{line:?} should pass through");
        }
    }

    #[test]
    fn test_image_line() {
        assert_eq!(
            format_line("image: https://example.com/a.png"),
            "![result](https://example.com/a.png)"
        );
        assert_eq!(
            format_line("image:http://example.com/b.gif"),
            "![result](http://example.com/b.gif)"
        );
    }

    #[test]
    fn test_image_requires_exact_prefix_and_scheme() {
        for line in ["Image: https://example.com/a.png", "image: ftp://example.com/a.png"] {
            assert_eq!(format_line(line), line);
        }
    }

    #[test]
    fn test_image_url_stops_at_whitespace() {
        assert_eq!(
            format_line("image: https://example.com/a.png (plot)"),
            "![result](https://example.com/a.png)"
        );
    }

    #[test]
    fn test_pair_bolds_key() {
        assert_eq!(format_line("Value | 42"), "**Value** | 42");
        assert_eq!(format_line("  padded key  | x"), "**padded key** | x");
    }

    #[test]
    fn test_pair_splits_on_first_separator_only() {
        assert_eq!(format_line("a | b | c"), "**a** | b | c");
        assert_eq!(format_line("k |  spaced right "), "**k** |  spaced right ");
    }

    #[test]
    fn test_pair_with_blank_key_passes_through() {
        assert_eq!(format_line(" | 42"), " | 42");
        assert_eq!(format_line("   | 42"), "   | 42");
    }

    #[test]
    fn test_plain_lines_pass_through() {
        assert_eq!(format_line(""), "");
        assert_eq!(format_line("4"), "4");
        assert_eq!(format_line("a|b"), "a|b");
    }

    #[test]
    fn test_line_count_preserved() {
        let input = "Input:\n2+2\n\nResult:\n4\nimage: https://x.io/p.png\nk | v\n";
        let output = format_markdown(input);
        assert_eq!(input.split('\n').count(), output.split('\n').count());
        assert_eq!(
            output,
            "## Input\n2+2\n\n## Result\n4\n![result](https://x.io/p.png)\n**k** | v\n"
        );
    }

    #[test]
    fn test_generated_heading_and_image_are_stable() {
        let input = "Result:\nimage: https://example.com/a.png\n";
        let once = format_markdown(input);
        assert_eq!(format_markdown(&once), once);
    }
}
