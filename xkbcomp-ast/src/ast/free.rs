//! Explicit teardown of finished trees.
//!
//! Each routine takes ownership of a chain, walks it front to back (detaching
//! a node before touching its children), releases the children with the
//! routine matching their kind, and returns the number of nodes released.
//! Dropping a tree without these routines is equally safe; they exist so the
//! compiler can hand a tree back at a well-defined point and account for it.

use super::chain::{Chain, Node};
use super::expr::{ExprDef, ExprKind};
use super::file::{FileDefs, XkbFile};
use super::include::IncludeStmt;
use super::stmt::{Stmt, VarDef};

/// Releases a statement chain and everything it owns.
pub fn free_stmt(mut stmts: Chain<Stmt>) -> usize {
    let mut freed = 0;

    while let Some(node) = stmts.pop_front() {
        let Node { def, .. } = *node;
        freed += match def {
            // The include routine releases this node along with its own chain.
            Stmt::Include(includes) => free_include(includes),
            Stmt::Expr(expr) => 1 + release_expr(expr),
            Stmt::VarDef(var) => 1 + release_var(var),
            Stmt::KeyTypeDef(def) => 1 + free_var_defs(def.body),
            Stmt::InterpDef(def) => 1 + free_expr(def.match_expr) + free_var_defs(def.body),
            Stmt::VModDef(def) => 1 + free_expr(def.value),
            Stmt::SymbolsDef(def) => 1 + free_stmt(def.symbols),
            Stmt::ModMapDef(def) => 1 + free_expr(def.keys),
            Stmt::GroupCompatDef(def) => 1 + free_expr(def.def),
            Stmt::IndicatorMapDef(def) => 1 + free_var_defs(def.body),
            Stmt::IndicatorNameDef(def) => 1 + free_expr(def.name),
            Stmt::KeycodeDef(_) | Stmt::KeyAliasDef(_) => 1,
        };
    }

    freed
}

/// Releases an expression chain.
pub fn free_expr(mut exprs: Chain<ExprDef>) -> usize {
    let mut freed = 0;

    while let Some(node) = exprs.pop_front() {
        let Node { def, .. } = *node;
        freed += 1 + release_expr(def);
    }

    freed
}

/// Releases a chain of variable definitions, as found in type, interpretation
/// and indicator bodies.
pub fn free_var_defs(mut vars: Chain<VarDef>) -> usize {
    let mut freed = 0;

    while let Some(node) = vars.pop_front() {
        let Node { def, .. } = *node;
        freed += 1 + release_var(def);
    }

    freed
}

/// Releases an include chain with its file, map, modifier, path and directive strings.
pub fn free_include(mut includes: Chain<IncludeStmt>) -> usize {
    let mut freed = 0;

    while let Some(node) = includes.pop_front() {
        drop(node);
        freed += 1;
    }

    freed
}

/// Releases a chain of file containers, recursing into nested sections.
///
/// Keymap, semantics and layout files are walked as sections, every other
/// kind as statements.
pub fn free_xkb_file(mut files: Chain<XkbFile>) -> usize {
    let mut freed = 0;

    while let Some(node) = files.pop_front() {
        let Node { def: file, .. } = *node;
        freed += 1 + match (file.file_type.is_composite(), file.defs) {
            (true, FileDefs::Files(sections)) => free_xkb_file(sections),
            (false, FileDefs::Stmts(stmts)) => free_stmt(stmts),
            // Unreachable through `FileFactory`, which rejects the pairing.
            (_, defs) => {
                debug_assert!(false, "{} section holds mismatched contents", file.file_type);
                match defs {
                    FileDefs::Files(sections) => free_xkb_file(sections),
                    FileDefs::Stmts(stmts) => free_stmt(stmts),
                }
            }
        };
    }

    freed
}

fn release_var(var: VarDef) -> usize {
    free_expr(var.name) + free_expr(var.value)
}

fn release_expr(expr: ExprDef) -> usize {
    match expr.kind {
        ExprKind::Unary { child, .. } => free_expr(child.into()),
        ExprKind::ActionList(actions) => free_expr(actions),
        ExprKind::Binary { left, right, .. } => free_expr(left.into()) + free_expr(right.into()),
        ExprKind::ActionDecl { args, .. } => free_expr(args),
        ExprKind::ArrayRef { entry, .. } => free_expr(entry.into()),
        ExprKind::KeysymList(mut list) => {
            list.release_syms();
            0
        }
        ExprKind::Value(_) | ExprKind::Ident(_) | ExprKind::FieldRef { .. } => 0,
    }
}
