use std::path::PathBuf;
use std::{fs, io};

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use spdlog::{debug, info};

use crate::patcher::filler::{build_filler, FILLER_SIGNATURE};
use crate::patcher::image_map::ImageMap;
use crate::patcher::meta::{build_description, upsert_description};
use crate::post_list::PostList;
use crate::report::{Outcome, RunReport};
use crate::text_utils::{competitor_from_slug, slug_to_title};

pub mod filler;
pub mod image_map;
pub mod meta;

const FOOTER_OPEN: &str = "<footer";

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Leave files that already contain a filler block untouched. Off by default:
    /// every run appends another block.
    pub skip_patched: bool,
}

/// Result of patching a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchedDocument {
    pub html: String,
    pub title: String,
    pub competitor: Option<String>,
    pub image: String,
    pub description: String,
}

fn replace_hero_image(html: &str, image: &str) -> String {
    lazy_static! {
        static ref HERO_IMAGE_REGEX: Regex = Regex::new(r#"src="/images/[^"]+""#).unwrap();
    }

    let replacement = format!(r#"src="/images/{}""#, image);
    HERO_IMAGE_REGEX.replace(html, NoExpand(&replacement)).into_owned()
}

pub fn extract_title(html: &str) -> Option<String> {
    lazy_static! {
        static ref TITLE_REGEX: Regex = Regex::new(r"(?is)<title>(.*?)</title>").unwrap();
    }

    TITLE_REGEX.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn insert_before_footer(html: &str, block: &str) -> String {
    if html.contains(FOOTER_OPEN) {
        html.replacen(FOOTER_OPEN, &format!("{}\n{}", block, FOOTER_OPEN), 1)
    } else {
        format!("{}\n{}", html, block)
    }
}

/// Swaps the hero image, pads the page with the filler block and refreshes its
/// meta description. Purely textual: only the first image reference and the
/// first meta description are rewritten.
pub fn patch_document(html: &str, slug: &str, images: &ImageMap) -> PatchedDocument {
    let image = images.resolve(slug).to_string();
    let html = replace_hero_image(html, &image);

    let title = extract_title(&html).unwrap_or_else(|| slug_to_title(slug));
    let competitor = competitor_from_slug(slug);

    let filler = build_filler(&title, competitor.as_deref());
    let html = insert_before_footer(&html, &filler);

    let description = build_description(&title, competitor.as_deref());
    let html = upsert_description(&html, &description);

    PatchedDocument {
        html,
        title,
        competitor,
        image,
        description,
    }
}

pub struct Patcher<'a> {
    pub posts_dir: PathBuf,
    pub images: &'a ImageMap,
    pub options: PatchOptions,
}

impl<'a> Patcher<'a> {
    pub fn new(posts_dir: PathBuf, images: &'a ImageMap, options: PatchOptions) -> Patcher<'a> {
        Patcher {
            posts_dir,
            images,
            options,
        }
    }

    /// Rewrites every `.html` file of the posts directory in place, in directory order.
    /// The first I/O error stops the run; files patched before it stay patched.
    pub fn run(&self) -> io::Result<RunReport> {
        let post_list = PostList {
            root_dir: self.posts_dir.clone(),
        };

        let mut report = RunReport::new("patch", self.posts_dir.clone());
        for post in post_list.retrieve_html_files()? {
            let html = match fs::read_to_string(&post.path) {
                Ok(html) => html,
                Err(e) => return Err(io::Error::new(e.kind(), format!("Error reading {}: {}", post.path.display(), e))),
            };

            if self.options.skip_patched && html.contains(FILLER_SIGNATURE) {
                info!("Skipping already patched file: {}", post.file_name);
                report.add(&post.file_name, Outcome::Skipped);
                continue;
            }

            let patched = patch_document(&html, &post.slug, self.images);
            debug!("Patching {}: title={}, competitor={:?}, image={}",
                post.file_name, patched.title, patched.competitor, patched.image);

            if let Err(e) = fs::write(&post.path, patched.html.as_bytes()) {
                return Err(io::Error::new(e.kind(), format!("Error writing {}: {}", post.path.display(), e)));
            }

            info!("Patched {}", post.file_name);
            report.add(&post.file_name, Outcome::Patched);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::patcher::image_map::DEFAULT_IMAGE;
    use crate::test_data::{BARE_POST, GENERATED_POST};

    use super::*;

    #[test]
    fn test_patch_comparison_page() {
        let images = ImageMap::builtin();
        let patched = patch_document(GENERATED_POST, "writesonic-vs-jasper", &images);

        assert_eq!(patched.title, "Writesonic vs Jasper – Which AI Writer Wins?");
        assert_eq!(patched.competitor.as_deref(), Some("Jasper"));
        assert_eq!(patched.image, "writesonic-vs-jasper.jpg");

        let html = &patched.html;
        // Only the first image reference changes
        assert!(html.contains(r#"<img src="/images/writesonic-vs-jasper.jpg" alt="Hero image" />"#));
        assert!(html.contains(r#"<img src="/images/inline-chart.png" alt="Chart" />"#));
        assert!(!html.contains("article-default.png"));

        assert!(html.contains(r#"<meta name="description" content="Detailed comparison of WriteSonic and Jasper."#));
        assert!(!html.contains("Compare Writesonic and Jasper."));
        assert_eq!(html.matches(r#"meta name="description""#).count(), 1);

        let filler_at = html.find(FILLER_SIGNATURE).unwrap();
        let footer_at = html.find("<footer").unwrap();
        assert!(filler_at < footer_at);
        assert!(html.contains("</p>\n<footer class=\"footer\">"));
        assert!(html.contains("When comparing WriteSonic to Jasper"));
    }

    #[test]
    fn test_patch_bare_page() {
        let images = ImageMap::builtin();
        let patched = patch_document(BARE_POST, "best-ai-writer", &images);

        assert_eq!(patched.title, "Best Ai Writer");
        assert_eq!(patched.competitor, None);
        assert_eq!(patched.image, DEFAULT_IMAGE);

        // No footer: the block goes at the end. No title: no meta description anchor.
        assert!(patched.html.starts_with(BARE_POST));
        assert!(patched.html.ends_with("</p>"));
        assert!(patched.html.contains(&format!("</html>\n{}", FILLER_SIGNATURE)));
        assert!(!patched.html.contains("meta name=\"description\""));
        assert!(patched.description.starts_with("Comprehensive guide to Best Ai Writer."));
    }

    #[test]
    fn test_title_spanning_lines() {
        let html = "<TITLE>\n  Multi\n  Line\n</TITLE>";
        assert_eq!(extract_title(html), Some("Multi\n  Line".to_string()));
        assert_eq!(extract_title("<p>none</p>"), None);
    }

    #[test]
    fn test_meta_inserted_after_title() {
        let html = "<head><title>Plain</title></head><body><img src=\"/images/x.png\"><footer></footer></body>";
        let patched = patch_document(html, "plain", &ImageMap::builtin());
        assert!(patched.html.starts_with(
            "<head><title>Plain</title>\n    <meta name=\"description\" content=\"Comprehensive guide to Plain."));
        assert!(patched.html.contains("<img src=\"/images/article-default.jpg\">"));
    }

    #[test]
    fn test_dollar_in_title_is_literal() {
        let html = "<title>Save $1 now</title><footer>";
        let patched = patch_document(html, "save", &ImageMap::builtin());
        assert!(patched.html.contains("content=\"Comprehensive guide to Save $1 now."));
    }

    #[test]
    fn test_run_patches_html_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("writesonic-vs-jasper.html"), GENERATED_POST).unwrap();
        fs::write(dir.path().join("notes.txt"), "leave me").unwrap();
        fs::create_dir(dir.path().join("drafts.html")).unwrap();

        let images = ImageMap::builtin();
        let patcher = Patcher::new(dir.path().to_path_buf(), &images, PatchOptions::default());
        let report = patcher.run().unwrap();

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.outcome_of("writesonic-vs-jasper.html"), Some(Outcome::Patched));
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "leave me");
    }

    #[test]
    fn test_second_run_appends_again() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("writesonic-vs-jasper.html");
        fs::write(&path, GENERATED_POST).unwrap();

        let images = ImageMap::builtin();
        let patcher = Patcher::new(dir.path().to_path_buf(), &images, PatchOptions::default());

        patcher.run().unwrap();
        let once = fs::read_to_string(&path).unwrap();
        patcher.run().unwrap();
        let twice = fs::read_to_string(&path).unwrap();

        assert!(twice.len() > once.len());
        assert_eq!(twice.matches(FILLER_SIGNATURE).count(), 2);
    }

    #[test]
    fn test_skip_patched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("best-ai-writer.html");
        fs::write(&path, GENERATED_POST).unwrap();

        let images = ImageMap::builtin();
        let options = PatchOptions { skip_patched: true };
        let patcher = Patcher::new(dir.path().to_path_buf(), &images, options);

        let report = patcher.run().unwrap();
        assert_eq!(report.outcome_of("best-ai-writer.html"), Some(Outcome::Patched));
        let once = fs::read_to_string(&path).unwrap();

        let report = patcher.run().unwrap();
        assert_eq!(report.outcome_of("best-ai-writer.html"), Some(Outcome::Skipped));
        assert_eq!(fs::read_to_string(&path).unwrap(), once);
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempdir().unwrap();
        let images = ImageMap::builtin();
        let patcher = Patcher::new(dir.path().join("nope"), &images, PatchOptions::default());
        assert!(patcher.run().is_err());
    }
}
