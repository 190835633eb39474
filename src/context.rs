use std::path::PathBuf;

use anyhow::{anyhow, Context as _};

/// Where posts land relative to the directory holding the `import` binary.
const POSTS_DIR_FROM_EXE: [&str; 4] = ["..", "src", "content", "posts"];

#[derive(Debug)]
pub struct Context {
    pub posts_dir: PathBuf,

    pub handlebars: handlebars::Handlebars<'static>,
}

impl Context {
    pub fn new(posts_dir: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            posts_dir,
            handlebars: crate::renderer::generate_renderer()?,
        })
    }
}

/// `<dir of the running executable>/../src/content/posts`
pub fn default_posts_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("while locating the import executable")?;
    let mut dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent: {exe:?}"))?
        .to_path_buf();
    dir.extend(POSTS_DIR_FROM_EXE);
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_posts_dir() {
        let dir = default_posts_dir().unwrap();
        assert!(dir.ends_with("../src/content/posts"));
    }
}
