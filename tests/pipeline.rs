use std::fs;

use postsmith::catalog::Catalog;
use postsmith::generator::Generator;
use postsmith::patcher::filler::FILLER_SIGNATURE;
use postsmith::patcher::image_map::{ImageMap, DEFAULT_IMAGE};
use postsmith::patcher::{PatchOptions, Patcher};
use postsmith::report::Outcome;
use postsmith::view::post_renderer::{PostRenderer, SiteSettings, DEFAULT_POST_TEMPLATE};

const SINGLE_POST: &str = r##"
[[post]]
filename = "a.html"
title = "A"
description = "D"
hero_heading = "H"
intro = "I"
conclusion = "C"

[[post.sections]]
heading = "S1"
body = "B1"
"##;

fn site() -> SiteSettings {
    SiteSettings {
        name: "AI Writer Hub".to_string(),
        affiliate_url: "https://example.com/?ref=1".to_string(),
        hero_image: "article-default.png".to_string(),
        copyright_year: 2025,
    }
}

#[test]
fn generate_then_patch_single_post() {
    let dir = tempfile::tempdir().unwrap();
    let posts_dir = dir.path().join("posts");
    let path = posts_dir.join("a.html");

    let posts = Catalog::from_toml(SINGLE_POST).unwrap().descriptors();
    let renderer = PostRenderer::new(DEFAULT_POST_TEMPLATE, site()).unwrap();
    let generator = Generator::new(posts_dir.clone(), &renderer);

    // First run creates the document
    let report = generator.run(&posts).unwrap();
    assert_eq!(report.outcome_of("a.html"), Some(Outcome::Created));
    let generated = fs::read_to_string(&path).unwrap();
    assert!(generated.contains("<title>A</title>"));
    assert!(generated.contains("<h1>H</h1>"));
    assert!(generated.contains("<h2>S1</h2>"));
    assert!(generated.contains("<p>B1</p>"));
    assert!(generated.contains("<p>C</p>"));

    // Second run leaves it byte for byte
    let report = generator.run(&posts).unwrap();
    assert_eq!(report.outcome_of("a.html"), Some(Outcome::Skipped));
    assert_eq!(fs::read_to_string(&path).unwrap(), generated);

    // Patch: slug "a" is not mapped, so the default image is used
    let images = ImageMap::builtin();
    let patcher = Patcher::new(posts_dir.clone(), &images, PatchOptions::default());
    let report = patcher.run().unwrap();
    assert_eq!(report.outcome_of("a.html"), Some(Outcome::Patched));

    let patched = fs::read_to_string(&path).unwrap();
    assert!(patched.contains(&format!(r#"src="/images/{}""#, DEFAULT_IMAGE)));
    assert!(patched.find(FILLER_SIGNATURE).unwrap() < patched.find("<footer").unwrap());
    assert!(patched.contains(r#"<meta name="description" content="Comprehensive guide to A."#));
    assert!(!patched.contains(r#"content="D""#));

    // Patching again keeps growing the file
    patcher.run().unwrap();
    let patched_twice = fs::read_to_string(&path).unwrap();
    assert!(patched_twice.len() > patched.len());
}

#[test]
fn builtin_catalog_generate_and_patch() {
    let dir = tempfile::tempdir().unwrap();
    let posts = Catalog::builtin().unwrap().descriptors();
    let renderer = PostRenderer::new(DEFAULT_POST_TEMPLATE, site()).unwrap();
    let generator = Generator::new(dir.path().to_path_buf(), &renderer);

    let report = generator.run(&posts).unwrap();
    assert_eq!(report.count(Outcome::Created), posts.len());

    let images = ImageMap::builtin();
    let patcher = Patcher::new(dir.path().to_path_buf(), &images, PatchOptions::default());
    let report = patcher.run().unwrap();
    assert_eq!(report.count(Outcome::Patched), posts.len());

    let koala = fs::read_to_string(dir.path().join("writesonic-vs-koala-writer.html")).unwrap();
    assert!(koala.contains(r#"src="/images/article-default.jpg""#));
    assert!(koala.contains("Detailed comparison of WriteSonic and Koala Writer."));
    assert!(koala.contains("When comparing WriteSonic to Koala Writer"));

    let article = fs::read_to_string(dir.path().join("best-article-writer.html")).unwrap();
    assert!(article.contains(r#"src="/images/best-article-writer.jpg""#));
    assert!(article.contains("Comprehensive guide to Best Article Writer"));
}
