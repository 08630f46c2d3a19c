pub mod chain;
pub mod expr;
pub mod file;
pub mod free;
pub mod include;
pub mod keysym_list;
pub mod stmt;

pub use chain::{append_stmt, Chain, Node, Statement};
pub use expr::{
    action_create, binary_result_type, expr_create_action_list, expr_create_array_ref, expr_create_binary,
    expr_create_field_ref, expr_create_ident, expr_create_unary, expr_create_value, BinaryOp, ExprDef, ExprKind,
    ExprOp, UnaryOp, Value, ValueType,
};
pub use file::{check_default_map, ensure_safe_map_name, FileDefs, FileFactory, XkbFile};
pub use free::{free_expr, free_include, free_stmt, free_var_defs, free_xkb_file};
pub use include::{include_create, include_create_with, include_stmt, IncludeSegment, IncludeSegmentParser, IncludeStmt};
pub use keysym_list::{
    append_keysym_list, append_multi_keysym_list, create_keysym_list, create_multi_keysym_list, KeysymList,
};
pub use stmt::*;
