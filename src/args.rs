use std::path::PathBuf;

use log::warn;

use crate::metadata::ImportRequest;

const FLAG_PREFIX: &str = "--";

/// Builds an [`ImportRequest`] from the tokens following the program name.
///
/// A `--name` token always consumes the next token as its value, even if that
/// token looks like a flag itself. The first bare token is the source path.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> ImportRequest {
    let mut request = ImportRequest::default();

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        if let Some(key) = token.strip_prefix(FLAG_PREFIX) {
            match tokens.get(i + 1) {
                Some(value) => {
                    if !apply_option(&mut request, key, value.as_ref()) {
                        warn!("unknown option --{key}. ignoring...");
                    }
                }
                None => warn!("option --{key} has no value. ignoring..."),
            }
            i += 2;
        } else {
            if request.file_path.as_os_str().is_empty() {
                request.file_path = PathBuf::from(token);
            }
            i += 1;
        }
    }

    if request.title.is_empty() {
        if let Some(stem) = request.file_path.file_stem() {
            request.title = stem.to_string_lossy().to_string();
        }
    }

    request
}

/// Returns `false` for option names the importer does not know.
fn apply_option(request: &mut ImportRequest, key: &str, value: &str) -> bool {
    match key {
        "title" => request.title = value.to_string(),
        "tags" => request.tags = value.split(',').map(|t| t.trim().to_string()).collect(),
        "category" => request.category = value.to_string(),
        "draft" => request.draft = value == "true",
        "lang" => request.lang = value.to_string(),
        // an empty value means "now", same as leaving it out
        "time" => request.time = Some(value.to_string()).filter(|t| !t.is_empty()),
        "address" => request.address = value.to_string(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::DEFAULT_LANG;

    #[test]
    fn test_defaults() {
        let request = parse_args(&["notes/my-note.md"]);
        assert_eq!(request.file_path, PathBuf::from("notes/my-note.md"));
        assert_eq!(request.title, "my-note");
        assert!(request.tags.is_empty());
        assert_eq!(request.category, "");
        assert!(!request.draft);
        assert_eq!(request.lang, DEFAULT_LANG);
        assert_eq!(request.time, None);
        assert_eq!(request.address, "");
    }

    #[test]
    fn test_all_options() {
        let request = parse_args(&[
            "--title",
            "Hello",
            "post.md",
            "--tags",
            "a, b ,c",
            "--category",
            "Tech",
            "--draft",
            "true",
            "--lang",
            "en",
            "--time",
            "2025-12-14T15:30:00",
            "--address",
            "Tokyo",
        ]);
        assert_eq!(request.file_path, PathBuf::from("post.md"));
        assert_eq!(request.title, "Hello");
        assert_eq!(request.tags, vec!["a", "b", "c"]);
        assert_eq!(request.category, "Tech");
        assert!(request.draft);
        assert_eq!(request.lang, "en");
        assert_eq!(request.time.as_deref(), Some("2025-12-14T15:30:00"));
        assert_eq!(request.address, "Tokyo");
    }

    #[test]
    fn test_draft_only_for_literal_true() {
        assert!(!parse_args(&["p.md", "--draft", "TRUE"]).draft);
        assert!(!parse_args(&["p.md", "--draft", "yes"]).draft);
        assert!(parse_args(&["p.md", "--draft", "true"]).draft);
    }

    #[test]
    fn test_flag_shaped_value_is_consumed() {
        let request = parse_args(&["--title", "--category", "post.md"]);
        assert_eq!(request.title, "--category");
        assert_eq!(request.category, "");
        assert_eq!(request.file_path, PathBuf::from("post.md"));
    }

    #[test]
    fn test_unknown_option_consumes_its_value() {
        let request = parse_args(&["--unknown", "first.md", "second.md"]);
        assert_eq!(request.file_path, PathBuf::from("second.md"));
        assert_eq!(request.title, "second");
    }

    #[test]
    fn test_apply_option_reports_unknown_names() {
        let mut request = ImportRequest::default();
        assert!(!apply_option(&mut request, "unknown", "x"));
        assert!(!apply_option(&mut request, "Title", "x"));
        assert_eq!(request, ImportRequest::default());
        assert!(apply_option(&mut request, "category", "Tech"));
        assert_eq!(request.category, "Tech");
    }

    #[test]
    fn test_only_first_bare_token_is_source() {
        let request = parse_args(&["first.md", "second.md"]);
        assert_eq!(request.file_path, PathBuf::from("first.md"));
    }

    #[test]
    fn test_dangling_flag_keeps_default() {
        let request = parse_args(&["post.md", "--lang"]);
        assert_eq!(request.lang, DEFAULT_LANG);
        let request = parse_args(&["post.md", "--tags"]);
        assert!(request.tags.is_empty());
    }

    #[test]
    fn test_empty_values() {
        let request = parse_args(&["post.md", "--title", "", "--tags", "", "--time", ""]);
        assert_eq!(request.title, "post");
        assert_eq!(request.tags, vec![""]);
        assert_eq!(request.time, None);
    }

    #[test]
    fn test_missing_source() {
        let request = parse_args::<&str>(&[]);
        assert!(request.file_path.as_os_str().is_empty());
        assert_eq!(request.title, "");
    }
}
