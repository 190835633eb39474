use std::path::PathBuf;

pub const DEFAULT_LANG: &str = "zh_CN";

/// Everything one invocation of the importer needs to know about the post.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    pub file_path: PathBuf,
    pub title: String,
    pub tags: Vec<String>,
    pub category: String,
    pub draft: bool,
    pub lang: String,
    #[serde(skip_serializing)]
    pub time: Option<String>,
    pub address: String,
}

impl Default for ImportRequest {
    fn default() -> Self {
        Self {
            file_path: PathBuf::new(),
            title: "".to_string(),
            tags: vec![],
            category: "".to_string(),
            draft: false,
            lang: DEFAULT_LANG.to_string(),
            time: None,
            address: "".to_string(),
        }
    }
}
