use std::path::PathBuf;
use std::{fs, io};

const POST_EXTENSION: &str = ".html";

#[derive(Debug, Clone, PartialEq)]
pub struct PostFile {
    /// File name without its extension
    pub slug: String,
    pub file_name: String,
    pub path: PathBuf,
}

pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    /// Regular `.html` files of the root directory, in directory order.
    pub fn retrieve_html_files(&self) -> io::Result<Vec<PostFile>> {
        let entries = match fs::read_dir(self.root_dir.as_path()) {
            Ok(entries) => entries,
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error listing {}: {}", self.root_dir.display(), e))),
        };

        let mut posts = vec![];
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            // Names that are not UTF-8 cannot be matched against the slug table anyway
            let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };

            if let Some(slug) = file_name.strip_suffix(POST_EXTENSION) {
                posts.push(PostFile {
                    slug: slug.to_string(),
                    file_name: file_name.clone(),
                    path: entry.path(),
                });
            }
        }

        Ok(posts)
    }
}
