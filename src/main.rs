use std::path::PathBuf;

use blogen_import::{context::default_posts_dir, Context};
use clap::{command, Arg, ArgAction};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Imports an exported markdown file into the blog's posts directory")
        .args(&[
            Arg::new("posts_dir")
                .long("posts-dir")
                .help("Directory where posts are written [default: <executable dir>/../src/content/posts]")
                .env("BLOG_POSTS_DIR")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("import_args")
                .help(concat!(
                    "<source-path> [--title <TITLE>] [--tags <a,b,..>] [--category <CATEGORY>] ",
                    "[--draft <true|false>] [--lang <LANG>] [--time <ISO 8601>] [--address <ADDRESS>]"
                ))
                .value_name("ARGS")
                .action(ArgAction::Append)
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        ])
        .get_matches();

    let posts_dir = match matches.get_one::<PathBuf>("posts_dir") {
        Some(dir) => dir.to_owned(),
        None => default_posts_dir()?,
    };
    let tokens: Vec<String> = matches
        .get_many::<String>("import_args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let ctx = Context::new(posts_dir)?;
    blogen_import::run(&ctx, &tokens, std::io::stdout().lock())?;

    Ok(())
}
