use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::{fs, io};

use spdlog::{debug, info};

use crate::catalog::PostDescriptor;
use crate::report::{Outcome, RunReport};
use crate::view::post_renderer::PostRenderer;

/// Writes one HTML file per descriptor. Files that already exist are never touched.
pub struct Generator<'a> {
    pub posts_dir: PathBuf,
    pub renderer: &'a PostRenderer<'a>,
}

impl<'a> Generator<'a> {
    pub fn new(posts_dir: PathBuf, renderer: &'a PostRenderer<'a>) -> Generator<'a> {
        Generator {
            posts_dir,
            renderer,
        }
    }

    pub fn run(&self, posts: &[PostDescriptor]) -> io::Result<RunReport> {
        if let Err(e) = fs::create_dir_all(&self.posts_dir) {
            return Err(io::Error::new(e.kind(), format!("Error creating posts directory {}: {}", self.posts_dir.display(), e)));
        }

        let mut report = RunReport::new("generate", self.posts_dir.clone());
        for post in posts {
            let outcome = self.write_post(post)?;
            report.add(&post.filename, outcome);
        }

        Ok(report)
    }

    fn write_post(&self, post: &PostDescriptor) -> io::Result<Outcome> {
        let path = self.posts_dir.join(&post.filename);

        // create_new makes the existence check and the creation one step
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                info!("Skipping existing file: {}", post.filename);
                return Ok(Outcome::Skipped);
            }
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error creating {}: {}", path.display(), e))),
        };

        let rendered = self.renderer.render(post);
        debug!("Rendered {} ({} bytes)", post.filename, rendered.len());
        file.write_all(rendered.as_bytes())?;

        info!("Created {}", post.filename);
        Ok(Outcome::Created)
    }
}
