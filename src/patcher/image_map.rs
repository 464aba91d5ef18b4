use std::collections::HashMap;

pub const DEFAULT_IMAGE: &str = "article-default.jpg";

/// Articles that already have a bespoke hero image.
const BUILTIN_IMAGES: [(&str, &str); 17] = [
    ("writesonic-vs-grammarly", "writesonic-vs-grammarly.jpg"),
    ("writesonic-pricing", "writesonic-pricing.jpg"),
    ("writesonic-vs-growthbar", "writesonic-vs-growthbar.jpg"),
    ("writesonic-vs-article-forge", "writesonic-vs-article-forge.jpg"),
    ("writesonic-vs-contentbot", "writesonic-vs-contentbot.jpg"),
    ("writesonic-vs-jasper", "writesonic-vs-jasper.jpg"),
    ("ai-writer-free", "ai-writer-free.jpg"),
    ("writesonic-vs-copy-ai", "writesonic-vs-copy-ai.jpg"),
    ("writesonic-vs-marketmuse", "writesonic-vs-marketmuse.jpg"),
    ("writesonic-vs-scribble-ai", "writesonic-vs-scribble-ai.jpg"),
    ("writesonic-vs-neuronwriter", "writesonic-vs-neuronwriter.jpg"),
    ("writesonic-affiliate-program", "writesonic-affiliate-program.jpg"),
    ("botsonic-pricing", "botsonic-pricing.jpg"),
    ("writesonic-alternatives", "writesonic-alternatives.jpg"),
    ("best-ai-content-generators", "best-ai-content-generators.jpg"),
    ("writesonic-vs-frase", "writesonic-vs-frase.jpg"),
    ("best-article-writer", "best-article-writer.jpg"),
];

/// Slug -> hero image file name. Nothing checks that the files exist.
#[derive(Debug, Clone)]
pub struct ImageMap {
    entries: HashMap<String, String>,
    default_image: String,
}

impl Default for ImageMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ImageMap {
    pub fn builtin() -> ImageMap {
        let entries = BUILTIN_IMAGES.iter()
            .map(|(slug, image)| (slug.to_string(), image.to_string()))
            .collect();

        ImageMap {
            entries,
            default_image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn with_default(mut self, default_image: &str) -> ImageMap {
        self.default_image = default_image.to_string();
        self
    }

    /// Later entries win over the built-in ones.
    pub fn with_overrides<'s, I>(mut self, overrides: I) -> ImageMap
        where I: IntoIterator<Item=(&'s String, &'s String)>
    {
        for (slug, image) in overrides {
            self.entries.insert(slug.clone(), image.clone());
        }
        self
    }

    pub fn resolve(&self, slug: &str) -> &str {
        self.entries.get(slug).map(String::as_str).unwrap_or(&self.default_image)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_resolve() {
        let images = ImageMap::builtin();
        assert_eq!(images.resolve("writesonic-vs-jasper"), "writesonic-vs-jasper.jpg");
        assert_eq!(images.resolve("best-ai-writer"), DEFAULT_IMAGE);
        assert_eq!(images.resolve(""), DEFAULT_IMAGE);
    }

    #[test]
    fn test_overrides_and_default() {
        let mut extra = BTreeMap::new();
        extra.insert("best-ai-writer".to_string(), "best.jpg".to_string());
        extra.insert("writesonic-pricing".to_string(), "pricing-v2.jpg".to_string());

        let images = ImageMap::builtin()
            .with_default("fallback.webp")
            .with_overrides(&extra);

        assert_eq!(images.resolve("best-ai-writer"), "best.jpg");
        assert_eq!(images.resolve("writesonic-pricing"), "pricing-v2.jpg");
        assert_eq!(images.resolve("writesonic-vs-frase"), "writesonic-vs-frase.jpg");
        assert_eq!(images.resolve("unknown"), "fallback.webp");
    }
}
