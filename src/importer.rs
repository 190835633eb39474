use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::{
    args::parse_args, context::Context, date::format_date_time, error::ImportError, frontmatter,
    metadata::ImportRequest, renderer, timestamp,
};

/// A post written by [`import`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imported {
    pub path: PathBuf,
    pub published: DateTime<Utc>,
}

/// Parses `tokens`, imports the post and writes the summary to `out`.
pub fn run<S: AsRef<str>, W: Write>(
    ctx: &Context,
    tokens: &[S],
    out: W,
) -> Result<Imported, ImportError> {
    let request = parse_args(tokens);
    let imported = import(ctx, &request)?;
    renderer::render_summary(
        &ctx.handlebars,
        &imported.path,
        &request,
        &timestamp::to_iso(&imported.published),
        out,
    )?;
    Ok(imported)
}

/// Copies the source file into `ctx.posts_dir` under a freshly rendered
/// metadata block. An existing post with the same file name is never touched.
pub fn import(ctx: &Context, request: &ImportRequest) -> Result<Imported, ImportError> {
    let source = &request.file_path;
    if source.as_os_str().is_empty() {
        return Err(ImportError::MissingSource);
    }
    if !source.exists() {
        return Err(ImportError::SourceNotFound(source.clone()));
    }

    debug!("reading {source:?}");
    let bytes = std::fs::read(source).map_err(|e| ImportError::Read {
        path: source.clone(),
        source: e,
    })?;
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!("{source:?} is not valid UTF-8. replacing invalid bytes...");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let body = frontmatter::strip(&content);

    // resolved once: the header and the summary must agree
    let published = timestamp::resolve(request.time.as_deref())?;
    let published_iso = timestamp::to_iso(&published);
    debug!("publishing {:?} at {}", request.title, format_date_time(&published));

    let header = renderer::render_header(&ctx.handlebars, request, &published_iso)?;

    let file_name = source
        .file_name()
        .ok_or_else(|| ImportError::NoFileName(source.clone()))?;
    let target_path = ctx.posts_dir.join(file_name);
    if target_path.exists() {
        return Err(ImportError::DestinationExists(target_path));
    }

    if !ctx.posts_dir.exists() {
        debug!("creating {:?}", ctx.posts_dir);
        fs_extra::dir::create_all(&ctx.posts_dir, false).map_err(|e| ImportError::CreateDir {
            path: ctx.posts_dir.clone(),
            source: e,
        })?;
    }

    let write_error = |e: std::io::Error| ImportError::Write {
        path: target_path.clone(),
        source: e,
    };
    // create_new: another import may have won the race since the check above
    let mut fd = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target_path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ImportError::DestinationExists(target_path.clone()),
            _ => write_error(e),
        })?;
    fd.write_all(format!("{header}\n\n{body}").as_bytes())
        .map_err(write_error)?;
    info!("wrote {target_path:?}");

    Ok(Imported {
        path: target_path,
        published,
    })
}
