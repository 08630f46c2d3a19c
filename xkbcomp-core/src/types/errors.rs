use thiserror::Error;

use super::{FileType, StmtType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XkbError {
    #[error("Illegal include statement \"{0}\"")]
    IllegalInclude(String),

    #[error("illegal use of 'alternate' merge mode on {0}")]
    IllegalMergeMode(StmtType),

    #[error("Couldn't resize {0} for append")]
    Alloc(&'static str),

    #[error("Expected a keysym list, found {0} expression")]
    NotAKeysymList(&'static str),

    #[error("{file_type} section cannot hold {found}")]
    FileContents { file_type: FileType, found: &'static str },
}

pub type Result<T> = std::result::Result<T, XkbError>;
