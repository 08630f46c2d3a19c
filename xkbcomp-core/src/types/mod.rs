pub mod errors;
pub mod key_name;
pub mod keysyms;
pub mod kinds;
pub mod merge;

pub use errors::*;
pub use key_name::*;
pub use keysyms::*;
pub use kinds::*;
pub use merge::*;
