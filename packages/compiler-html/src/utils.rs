//! Small string helpers shared by the layout generators.

/// Separator between values that share a row.
pub(crate) const FIELD_SEPARATOR: &str = " | ";

/// Diameter of the photo and the initials badge, in pixels.
pub const AVATAR_SIZE: u32 = 80;

const AVATAR_FONT_RATIO: f64 = 0.35;

/// Escape text for use in element content or a double-quoted attribute.
///
/// `&` is replaced first so entities produced by later replacements are not
/// escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip a leading `http://` or `https://` and one trailing slash, for
/// displaying a URL (`https://example.com/` -> `example.com`).
pub fn strip_protocol(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.strip_suffix('/').unwrap_or(without_scheme)
}

/// Up to two uppercase initials taken from the first words of `full_name`.
pub fn get_initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Prefix `https://` onto URLs that carry no scheme. Protocol-relative URLs
/// (`//host/path`) get `https:`.
pub fn ensure_absolute_url(url: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else if url.starts_with("//") {
        format!("https:{url}")
    } else {
        format!("https://{url}")
    }
}

fn has_scheme(url: &str) -> bool {
    let Some(end) = url.find("://") else {
        return false;
    };
    let mut chars = url[..end].chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// A circular badge showing the initials of `full_name`, built from a table
/// cell so that clients without `border-radius` support still get a square.
pub fn generate_initials_avatar_html(full_name: &str, primary_color: &str, size: u32) -> String {
    let initials = escape_html(&get_initials(full_name));
    let font_size = (f64::from(size) * AVATAR_FONT_RATIO).round() as u32;
    format!(
        "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\"><tr><td width=\"{size}\" height=\"{size}\" style=\"width: {size}px; height: {size}px; background-color: {primary_color}; border-radius: 50%; text-align: center; vertical-align: middle; font-size: {font_size}px; font-weight: bold; color: #ffffff; font-family: Arial, Helvetica, sans-serif;\">{initials}</td></tr></table>"
    )
}

/// The field's value unless it is unset or empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_each_special_character() {
        assert_eq!(escape_html("A & B"), "A &amp; B");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a > b"), "a &gt; b");
        assert_eq!(escape_html("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn escapes_all_special_characters_together() {
        assert_eq!(
            escape_html("<a href=\"x\">&'test'"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;test&#39;"
        );
    }

    #[test]
    fn escaping_existing_entities_escapes_the_ampersand() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn plain_and_empty_text_pass_through() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("Hello World"), "Hello World");
    }

    #[test]
    fn strip_protocol_variants() {
        assert_eq!(strip_protocol("https://example.com"), "example.com");
        assert_eq!(strip_protocol("http://example.com"), "example.com");
        assert_eq!(strip_protocol("https://example.com/"), "example.com");
        assert_eq!(
            strip_protocol("https://example.com/path/to/page"),
            "example.com/path/to/page"
        );
        assert_eq!(strip_protocol("example.com"), "example.com");
    }

    #[test]
    fn strip_protocol_removes_only_one_trailing_slash() {
        assert_eq!(strip_protocol("https://example.com//"), "example.com/");
        assert_eq!(strip_protocol("ftp://example.com/"), "ftp://example.com");
    }

    #[test]
    fn initials_from_first_two_words() {
        assert_eq!(get_initials("Jane Artist"), "JA");
        assert_eq!(get_initials("mary ann van dyke"), "MA");
        assert_eq!(get_initials("  cher  "), "C");
        assert_eq!(get_initials(""), "");
        assert_eq!(get_initials("   "), "");
    }

    #[test]
    fn ensure_absolute_url_keeps_schemes() {
        assert_eq!(
            ensure_absolute_url("https://github.com/jane"),
            "https://github.com/jane"
        );
        assert_eq!(ensure_absolute_url("http://a.io"), "http://a.io");
        assert_eq!(ensure_absolute_url("github.com/jane"), "https://github.com/jane");
        assert_eq!(ensure_absolute_url("//cdn.io/x"), "https://cdn.io/x");
        assert_eq!(
            ensure_absolute_url("example.com/?next=https://x"),
            "https://example.com/?next=https://x"
        );
    }

    #[test]
    fn initials_avatar_uses_size_and_color() {
        let html = generate_initials_avatar_html("Jane Artist", "#1a365d", AVATAR_SIZE);
        assert!(html.contains("width: 80px; height: 80px"));
        assert!(html.contains("background-color: #1a365d"));
        assert!(html.contains("border-radius: 50%"));
        assert!(html.contains("font-size: 28px"));
        assert!(html.contains(">JA</td>"));
    }

    #[test]
    fn initials_avatar_font_scales_with_size() {
        let html = generate_initials_avatar_html("Jane", "#000", 40);
        assert!(html.contains("font-size: 14px"));
    }

    #[test]
    fn present_treats_empty_as_absent() {
        assert_eq!(present(&None), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some("x".into())), Some("x"));
    }
}
