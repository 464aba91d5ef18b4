use anyhow::Result;

use postsmith::config::Config;
use postsmith::patcher::image_map::ImageMap;
use postsmith::patcher::{PatchOptions, Patcher};
use postsmith::report::RunReport;

use crate::PatchArgs;

fn image_map(config: &Config) -> ImageMap {
    let images = ImageMap::builtin();
    let images = match config.default_image() {
        Some(default_image) => images.with_default(default_image),
        None => images,
    };
    images.with_overrides(&config.images)
}

pub fn patch_cmd(config: &Config, args: PatchArgs) -> Result<RunReport> {
    let images = image_map(config);
    let options = PatchOptions {
        skip_patched: args.skip_patched,
    };

    let patcher = Patcher::new(config.paths.posts_dir.clone(), &images, options);
    Ok(patcher.run()?)
}
