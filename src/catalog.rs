use std::io::ErrorKind;
use std::path::Path;
use std::{fs, io};

use serde::Deserialize;

/// Posts shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/posts.toml");

const DOCUMENT_EXTENSIONS: [&str; 2] = [".html", ".htm"];

const WRITESONIC_OVERVIEW: &str = "Writesonic combines long‑form generation with an SEO Checker &amp; Optimizer \
that analyses keyword coverage and headings in real time【508602464543840†L86-L130】【39824570645077†L254-L265】. \
It integrates with multiple AI models and offers over 80 tools for writing, research and editing\
【39824570645077†L139-L169】. Its pricing is flexible, with a generous free tier and affordable paid plans\
【879106096187632†L146-L166】.";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    /// Trusted HTML, emitted verbatim
    pub body: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PostDescriptor {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub hero_heading: String,
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub conclusion: String,
}

/// A head-to-head page against one competitor, expanded into a full post.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Comparison {
    pub name: String,
    pub slug: String,
    pub summary: String,
}

impl Comparison {
    pub fn to_descriptor(&self) -> PostDescriptor {
        let name = self.name.as_str();

        PostDescriptor {
            filename: format!("writesonic-vs-{}.html", self.slug),
            title: format!("Writesonic vs {} – Which AI Writer Wins?", name),
            description: format!("Compare Writesonic and {} to decide which AI writing tool offers the best features and value.", name),
            hero_heading: format!("Writesonic vs {}", name),
            intro: format!("{} is a notable player in the AI writing space. In this article, we compare its strengths \
                and weaknesses to Writesonic’s versatile platform.", name),
            sections: vec![
                Section {
                    heading: format!("{} Overview", name),
                    body: self.summary.clone(),
                },
                Section {
                    heading: "Writesonic Overview".to_string(),
                    body: WRITESONIC_OVERVIEW.to_string(),
                },
                Section {
                    heading: "Which Should You Choose?".to_string(),
                    body: format!("If you need {}’s niche capabilities, it may serve a specific purpose. However, for a \
                        complete writing and SEO solution, Writesonic delivers more functionality and value. The built‑in \
                        article writer and optimisation tools make it ideal for bloggers, marketers and entrepreneurs.",
                                  name.to_lowercase()),
                },
            ],
            conclusion: format!("{} has its merits, but Writesonic’s comprehensive suite of tools makes it the better \
                option for most users. Sign up today to experience AI‑powered writing with SEO built in.", name),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct Catalog {
    #[serde(default, rename = "post")]
    pub posts: Vec<PostDescriptor>,
    #[serde(default, rename = "comparison")]
    pub comparisons: Vec<Comparison>,
}

impl Catalog {
    pub fn builtin() -> io::Result<Catalog> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    pub fn from_file(path: &Path) -> io::Result<Catalog> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening catalog {}: {}", path.display(), e))),
        };
        Self::from_toml(&content)
    }

    pub fn from_toml(src: &str) -> io::Result<Catalog> {
        let catalog: Catalog = match toml::from_str(src) {
            Ok(catalog) => catalog,
            Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, format!("Error parsing catalog: {}", e))),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Plain posts in file order, followed by the expanded comparisons.
    pub fn descriptors(&self) -> Vec<PostDescriptor> {
        self.posts.iter()
            .cloned()
            .chain(self.comparisons.iter().map(Comparison::to_descriptor))
            .collect()
    }

    fn validate(&self) -> io::Result<()> {
        for post in self.descriptors() {
            validate_filename(&post.filename)?;
        }
        Ok(())
    }
}

/// Filenames are joined onto the posts directory, so they must stay inside it.
pub fn validate_filename(filename: &str) -> io::Result<()> {
    let invalid = |reason: &str| {
        Err(io::Error::new(ErrorKind::InvalidData, format!("Invalid post filename '{}': {}", filename, reason)))
    };

    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return invalid("must not contain a path");
    }

    match DOCUMENT_EXTENSIONS.iter().find(|ext| filename.ends_with(*ext)) {
        None => invalid("must end in .html or .htm"),
        Some(ext) if filename.len() == ext.len() => invalid("missing a name"),
        Some(_) => Ok(()),
    }
}
