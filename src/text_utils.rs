/// Marker that turns a slug such as `writesonic-vs-jasper` into a head-to-head page.
pub const COMPARISON_MARKER: &str = "-vs-";

/// Capitalises the first letter of every run of letters and lower-cases the rest.
/// Anything that is not a letter (spaces, digits, apostrophes) starts a new run,
/// so `they're 3d` becomes `They'Re 3D`.
pub fn title_case(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                buf.extend(c.to_lowercase());
            } else {
                buf.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            buf.push(c);
            in_word = false;
        }
    }

    buf
}

pub fn slug_to_title(slug: &str) -> String {
    title_case(&slug.replace('-', " "))
}

/// Competitor named by a comparison slug: everything after the first `-vs-`,
/// de-hyphenated and title-cased.
pub fn competitor_from_slug(slug: &str) -> Option<String> {
    let (_, rest) = slug.split_once(COMPARISON_MARKER)?;
    if rest.is_empty() {
        return None;
    }
    Some(slug_to_title(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("best ai writer"), "Best Ai Writer");
        assert_eq!(title_case("ALREADY LOUD"), "Already Loud");
        assert_eq!(title_case("they're 3d"), "They'Re 3D");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_slug_to_title() {
        assert_eq!(slug_to_title("writesonic-pricing"), "Writesonic Pricing");
        assert_eq!(slug_to_title("a"), "A");
    }

    #[test]
    fn test_competitor_from_slug() {
        assert_eq!(competitor_from_slug("writesonic-vs-jasper"), Some("Jasper".to_string()));
        assert_eq!(competitor_from_slug("writesonic-vs-copy-ai"), Some("Copy Ai".to_string()));
        assert_eq!(competitor_from_slug("writesonic-vs-article-forge"), Some("Article Forge".to_string()));
        assert_eq!(competitor_from_slug("best-ai-writer"), None);
        assert_eq!(competitor_from_slug("writesonic-vs-"), None);
        // Only the first marker splits
        assert_eq!(competitor_from_slug("a-vs-b-vs-c"), Some("B Vs C".to_string()));
    }
}
