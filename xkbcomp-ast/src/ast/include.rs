use log::{debug, error};
use xkbcomp_core::{MergeMode, Result, StmtType, XkbError};

use super::chain::{Chain, Node, Statement};
use crate::lexer::IncludeMapParser;

/// One `file(map):modifier` reference of an include directive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncludeStmt {
    pub merge: MergeMode,
    /// The whole directive text; only set on the first node of a chain.
    pub stmt: Option<String>,
    pub file: Option<String>,
    pub map: Option<String>,
    pub modifier: Option<String>,
    /// Resolved path, filled in once the file has been located.
    pub path: Option<String>,
}

impl IncludeStmt {
    /// Neither file nor map: the include refers back to the file being processed.
    pub fn is_self(&self) -> bool {
        self.file.is_none() && self.map.is_none()
    }
}

impl Statement for IncludeStmt {
    fn stmt_type(&self) -> StmtType {
        StmtType::Include
    }
}

/// One segment taken off the front of an include directive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncludeSegment {
    pub file: Option<String>,
    pub map: Option<String>,
    pub modifier: Option<String>,
    /// `+` or `|` when another segment follows, `None` at the end of the text.
    pub next_op: Option<char>,
    /// Bytes of input used, operator included.
    pub consumed: usize,
}

/// Splits include directives into segments.
pub trait IncludeSegmentParser {
    /// Parses the segment at the start of `text`, or `None` if it is malformed.
    fn parse_segment(&self, text: &str) -> Option<IncludeSegment>;
}

/// Builds the include chain for `directive` with the default segment parser.
pub fn include_create(directive: &str, merge: MergeMode) -> Result<Chain<IncludeStmt>> {
    include_create_with(&IncludeMapParser::new(), directive, merge)
}

/// Builds one include node per segment of `directive`.
///
/// The first node gets `merge`; each later node's mode comes from the
/// operator before it (`|` augments, anything else overrides). A malformed
/// segment, a dangling operator, or a second reference to the current file
/// rejects the whole directive.
pub fn include_create_with<P: IncludeSegmentParser + ?Sized>(
    parser: &P,
    directive: &str,
    mut merge: MergeMode,
) -> Result<Chain<IncludeStmt>> {
    let mut nodes: Vec<IncludeStmt> = Vec::new();
    let mut have_self = false;
    let mut rest = Some(directive);

    while let Some(text) = rest.filter(|text| !text.is_empty()) {
        let segment = match parser.parse_segment(text) {
            Some(segment) if segment.consumed > 0 && segment.consumed <= text.len() => segment,
            _ => return Err(illegal_include(directive)),
        };

        if segment.file.is_none() && segment.map.is_none() {
            if have_self {
                return Err(illegal_include(directive));
            }
            have_self = true;
        }

        nodes.push(IncludeStmt {
            merge,
            stmt: None,
            file: segment.file,
            map: segment.map,
            modifier: segment.modifier,
            path: None,
        });

        rest = match segment.next_op {
            Some(op) => {
                let remaining = text.get(segment.consumed..).unwrap_or("");
                if remaining.is_empty() {
                    return Err(illegal_include(directive));
                }
                merge = MergeMode::from_include_op(op);
                Some(remaining)
            }
            None => None,
        };
    }

    if let Some(first) = nodes.first_mut() {
        first.stmt = Some(directive.to_string());
    }
    debug!("include \"{}\" produced {} node(s)", directive, nodes.len());
    Ok(nodes.into_iter().collect())
}

fn illegal_include(directive: &str) -> XkbError {
    error!("Illegal include statement \"{}\"; ignored", directive);
    XkbError::IllegalInclude(directive.to_string())
}

/// Wraps an include chain so it can sit in a statement list.
pub fn include_stmt(chain: Chain<IncludeStmt>) -> Option<Box<Node<super::stmt::Stmt>>> {
    if chain.is_empty() {
        return None;
    }
    Some(Node::new(chain.into()))
}
