use std::fs;

use anyhow::{Context, Result};
use spdlog::debug;

use postsmith::catalog::Catalog;
use postsmith::config::Config;
use postsmith::generator::Generator;
use postsmith::report::RunReport;
use postsmith::view::post_renderer::{PostRenderer, SiteSettings, DEFAULT_POST_TEMPLATE};

use crate::GenerateArgs;

pub fn generate_cmd(config: &Config, args: GenerateArgs) -> Result<RunReport> {
    let catalog = match args.catalog {
        Some(ref path) => Catalog::from_file(path)?,
        None => Catalog::builtin().context("Built-in catalog is invalid")?,
    };
    let posts = catalog.descriptors();
    debug!("Catalog holds {} posts", posts.len());

    let template_src = match config.paths.post_template {
        Some(ref path) => fs::read_to_string(path)
            .with_context(|| format!("Error loading post template {}", path.display()))?,
        None => DEFAULT_POST_TEMPLATE.to_string(),
    };

    let renderer = PostRenderer::new(&template_src, SiteSettings::from_config(config))?;
    let generator = Generator::new(config.paths.posts_dir.clone(), &renderer);

    Ok(generator.run(&posts)?)
}
