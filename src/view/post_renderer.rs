use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::catalog::PostDescriptor;
use crate::config::Config;

/// Skeleton used when the configuration does not name a template file.
pub const DEFAULT_POST_TEMPLATE: &str = include_str!("../../templates/post.tpl");

#[derive(ramhorns::Content)]
struct ViewSection<'a> {
    heading: &'a str,
    body: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewPost<'a> {
    site_name: &'a str,
    affiliate_url: &'a str,
    hero_image: &'a str,
    copyright_year: i64,
    title: &'a str,
    description: &'a str,
    hero_heading: &'a str,
    intro: &'a str,
    sections: Vec<ViewSection<'a>>,
    conclusion: &'a str,
}

/// Values shared by every page of the site.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub name: String,
    pub affiliate_url: String,
    pub hero_image: String,
    pub copyright_year: i32,
}

impl SiteSettings {
    pub fn from_config(config: &Config) -> SiteSettings {
        SiteSettings {
            name: config.site.name.clone(),
            affiliate_url: config.site.affiliate_url.clone(),
            hero_image: config.site.hero_image.clone(),
            copyright_year: config.copyright_year(),
        }
    }
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
    pub site: SiteSettings,
}

impl<'a> PostRenderer<'a> {
    pub fn new(post_tpl_src: &'a str, site: SiteSettings) -> io::Result<PostRenderer<'a>> {
        let template = match Template::new(post_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing post template: {}", e)));
            }
        };

        Ok(PostRenderer {
            template,
            site,
        })
    }

    /// Descriptor text is trusted and lands in the page unescaped.
    pub fn render(&self, post: &PostDescriptor) -> String {
        let sections = post.sections.iter()
            .map(|s| ViewSection { heading: s.heading.as_str(), body: s.body.as_str() })
            .collect();

        self.template.render(&ViewPost {
            site_name: self.site.name.as_str(),
            affiliate_url: self.site.affiliate_url.as_str(),
            hero_image: self.site.hero_image.as_str(),
            copyright_year: self.site.copyright_year as i64,
            title: post.title.as_str(),
            description: post.description.as_str(),
            hero_heading: post.hero_heading.as_str(),
            intro: post.intro.as_str(),
            sections,
            conclusion: post.conclusion.as_str(),
        })
    }
}
