use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::Serialize;

#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Created,
    Skipped,
    Patched,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FileReport {
    pub file: String,
    pub outcome: Outcome,
}

/// What a generate or patch run did, file by file, in processing order.
#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub command: String,
    pub posts_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new(command: &str, posts_dir: PathBuf) -> RunReport {
        RunReport {
            command: command.to_string(),
            posts_dir,
            files: vec![],
        }
    }

    pub fn add(&mut self, file: &str, outcome: Outcome) {
        self.files.push(FileReport {
            file: file.to_string(),
            outcome,
        });
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }

    pub fn outcome_of(&self, file: &str) -> Option<Outcome> {
        self.files.iter().find(|f| f.file == file).map(|f| f.outcome)
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} finished in {}: created={}, patched={}, skipped={}",
               self.command,
               self.posts_dir.display(),
               self.count(Outcome::Created),
               self.count(Outcome::Patched),
               self.count(Outcome::Skipped),
        )
    }
}
