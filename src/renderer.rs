use std::io::Write;
use std::path::Path;

use anyhow::Context;
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use serde_json::Value;

use crate::metadata::ImportRequest;

const FRONTMATTER_TEMPLATE: &str = include_str!("../templates/frontmatter.hbs");
const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.hbs");

#[derive(Serialize, Debug)]
struct HeaderData<'a> {
    published: &'a str,
    meta: &'a ImportRequest,
}

#[derive(Serialize, Debug)]
struct SummaryData<'a> {
    path: &'a Path,
    published: &'a str,
    meta: &'a ImportRequest,
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

handlebars_helper!(quoted_list: |lst: array| lst
    .iter()
    .map(|v| format!("\"{}\"", as_text(v)))
    .collect::<Vec<_>>()
    .join(", "));
handlebars_helper!(join: |lst: array| lst.iter().map(as_text).collect::<Vec<_>>().join(", "));

pub(crate) fn generate_renderer() -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    // field values go into the block verbatim
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);
    handlebars.register_helper("quoted_list", Box::new(quoted_list));
    handlebars.register_helper("join", Box::new(join));
    handlebars
        .register_template_string("frontmatter", FRONTMATTER_TEMPLATE)
        .context("frontmatter.hbs")?;
    handlebars
        .register_template_string("summary", SUMMARY_TEMPLATE)
        .context("summary.hbs")?;

    Ok(handlebars)
}

/// Renders the metadata block, from the opening to the closing `---`.
pub(crate) fn render_header(
    handlebars: &Handlebars<'_>,
    meta: &ImportRequest,
    published: &str,
) -> Result<String, handlebars::RenderError> {
    let data = HeaderData { published, meta };
    let mut header = handlebars.render("frontmatter", &data)?;
    while header.ends_with('\n') || header.ends_with('\r') {
        header.pop();
    }
    Ok(header)
}

pub(crate) fn render_summary<W: Write>(
    handlebars: &Handlebars<'_>,
    path: &Path,
    meta: &ImportRequest,
    published: &str,
    out: W,
) -> Result<(), handlebars::RenderError> {
    let data = SummaryData {
        path,
        published,
        meta,
    };
    handlebars.render_to_write("summary", &data, out)
}
