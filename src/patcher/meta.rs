use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

/// Substring that tells whether a page already carries a meta description.
const META_DESCRIPTION_MARKER: &str = r#"meta name="description""#;
const TITLE_CLOSE: &str = "</title>";

pub fn build_description(title: &str, competitor: Option<&str>) -> String {
    match competitor {
        Some(c) => format!("Detailed comparison of WriteSonic and {c}. Explore features, pricing, pros and cons, \
            user reviews and SEO insights. Optimised to rank for queries like ‘WriteSonic vs {c}’, ‘best AI writer \
            2025’ and related keywords.", c = c),
        None => format!("Comprehensive guide to {}. Includes keyword research, AI writing technology breakdown, \
            pricing, SEO best practices and frequently asked questions. Ideal for ranking on ‘best AI writer 2025’, \
            ‘AI content generator free’, ‘WriteSonic review’ and similar search queries.", title),
    }
}

/// Replaces the content of the first meta description, or adds one right after
/// the first `</title>` when the page has none. A page with neither is returned as is.
pub fn upsert_description(html: &str, description: &str) -> String {
    lazy_static! {
        static ref META_DESCRIPTION_REGEX: Regex = Regex::new(
            r#"<meta name="description" content="[^"]*""#
        ).unwrap();
    }

    if html.contains(META_DESCRIPTION_MARKER) {
        let replacement = format!(r#"<meta name="description" content="{}""#, description);
        META_DESCRIPTION_REGEX.replace(html, NoExpand(&replacement)).into_owned()
    } else {
        let tag = format!("{}\n    <meta name=\"description\" content=\"{}\" />", TITLE_CLOSE, description);
        html.replacen(TITLE_CLOSE, &tag, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_variants() {
        let comparison = build_description("Writesonic vs Jasper", Some("Jasper"));
        assert!(comparison.starts_with("Detailed comparison of WriteSonic and Jasper."));
        assert!(comparison.contains("‘WriteSonic vs Jasper’"));

        let guide = build_description("Best AI Writer", None);
        assert!(guide.starts_with("Comprehensive guide to Best AI Writer."));
        assert!(!guide.contains("WriteSonic vs"));
    }

    #[test]
    fn test_replace_existing_first_only() {
        let html = r#"<title>T</title>
<meta name="description" content="old" />
<meta name="description" content="second" />"#;
        let res = upsert_description(html, "new $1 text");
        assert_eq!(res, r#"<title>T</title>
<meta name="description" content="new $1 text" />
<meta name="description" content="second" />"#);
    }

    #[test]
    fn test_insert_after_title() {
        let html = "<head>\n    <title>T</title>\n</head>";
        let res = upsert_description(html, "D");
        assert_eq!(res, "<head>\n    <title>T</title>\n    <meta name=\"description\" content=\"D\" />\n</head>");
    }

    #[test]
    fn test_no_title_no_meta() {
        let html = "<p>nothing to anchor on</p>";
        assert_eq!(upsert_description(html, "D"), html);
    }

    #[test]
    fn test_marker_with_unexpected_layout() {
        // Attribute order differs: the marker is there but the pattern does not match
        let html = r#"<meta name="description" data-x="1" content="old" />"#;
        assert_eq!(upsert_description(html, "D"), html);
    }
}
