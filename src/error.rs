use std::path::PathBuf;

pub(crate) const USAGE_EXAMPLE: &str = concat!(
    "example: import ~/Downloads/post.md --title \"Post title\" ",
    "--tags \"frontend,JavaScript\" --category \"Tech\""
);

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("missing path of the exported markdown file\n{}", USAGE_EXAMPLE)]
    MissingSource,
    #[error("source file does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("invalid time {0:?}, use ISO 8601 such as 2025-12-14T15:30:00")]
    InvalidTime(String),
    #[error("{} already exists, import skipped. delete or rename it and try again", .0.display())]
    DestinationExists(PathBuf),
    #[error("source path has no file name: {}", .0.display())]
    NoFileName(PathBuf),
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },
    #[error(transparent)]
    Render(#[from] handlebars::RenderError),
}
