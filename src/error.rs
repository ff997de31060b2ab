use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvdashError {
    #[error("parse error in {path}: {detail}")]
    Parse { path: String, detail: String },

    #[error("unmapped inventory type: {tag}")]
    Lookup { tag: String },

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("searchIndex already exists in {path}: target a fresh output path")]
    IndexExists { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl InvdashError {
    pub(crate) fn parse(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InvdashError>;
