pub mod include_map;
pub mod lexer;
pub mod token;

pub use include_map::IncludeMapParser;
pub use lexer::Lexer;
pub use token::IncludeToken;
