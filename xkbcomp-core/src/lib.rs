pub mod types;

pub use types::*;

// Re-export commonly used types
pub use types::errors::{Result, XkbError};
pub use types::key_name::KeyName;
pub use types::keysyms::{lookup_keysym, BasicKeysymResolver, Keysym, KeysymResolver};
pub use types::kinds::{FileType, StmtType};
pub use types::merge::MergeMode;
