use xkbcomp_core::{KeyName, MergeMode, StmtType, XkbError};

use super::chain::{Chain, Node, Statement};
use super::expr::{expr_create_ident, expr_create_value, ExprDef, Value};
use super::include::IncludeStmt;
use crate::diagnostics::{Diagnostics, Location};

#[derive(Debug)]
pub struct KeycodeDef {
    pub merge: MergeMode,
    pub name: KeyName,
    pub value: u64,
}

#[derive(Debug)]
pub struct KeyAliasDef {
    pub merge: MergeMode,
    pub alias: KeyName,
    pub real: KeyName,
}

#[derive(Debug)]
pub struct VModDef {
    pub merge: MergeMode,
    pub name: String,
    pub value: Chain<ExprDef>,
}

/// `name = value;`. The name is empty for the bare `[ ... ]` arrays of a key body.
#[derive(Debug)]
pub struct VarDef {
    pub merge: MergeMode,
    pub name: Chain<ExprDef>,
    pub value: Chain<ExprDef>,
}

#[derive(Debug)]
pub struct InterpDef {
    pub merge: MergeMode,
    pub sym: String,
    pub match_expr: Chain<ExprDef>,
    /// Assignments applied when the interpretation matches.
    pub body: Chain<VarDef>,
}

#[derive(Debug)]
pub struct KeyTypeDef {
    pub merge: MergeMode,
    pub name: String,
    pub body: Chain<VarDef>,
}

#[derive(Debug)]
pub struct SymbolsDef {
    pub merge: MergeMode,
    pub key_name: KeyName,
    pub symbols: Chain<Stmt>,
}

#[derive(Debug)]
pub struct GroupCompatDef {
    pub merge: MergeMode,
    pub group: u32,
    pub def: Chain<ExprDef>,
}

#[derive(Debug)]
pub struct ModMapDef {
    pub merge: MergeMode,
    pub modifier: String,
    pub keys: Chain<ExprDef>,
}

#[derive(Debug)]
pub struct IndicatorMapDef {
    pub merge: MergeMode,
    pub name: String,
    pub body: Chain<VarDef>,
}

#[derive(Debug)]
pub struct IndicatorNameDef {
    pub merge: MergeMode,
    pub ndx: u32,
    pub name: Chain<ExprDef>,
    pub is_virtual: bool,
}

/// One entry of a heterogeneous statement chain.
#[derive(Debug)]
pub enum Stmt {
    Expr(ExprDef),
    KeycodeDef(KeycodeDef),
    KeyAliasDef(KeyAliasDef),
    VModDef(VModDef),
    VarDef(VarDef),
    InterpDef(InterpDef),
    KeyTypeDef(KeyTypeDef),
    SymbolsDef(SymbolsDef),
    GroupCompatDef(GroupCompatDef),
    ModMapDef(ModMapDef),
    IndicatorMapDef(IndicatorMapDef),
    IndicatorNameDef(IndicatorNameDef),
    /// An include directive: its own chain of include nodes.
    Include(Chain<IncludeStmt>),
}

impl Stmt {
    pub fn merge(&self) -> Option<MergeMode> {
        let merge = match self {
            Stmt::Expr(_) => return None,
            Stmt::Include(chain) => return chain.first().map(|incl| incl.merge),
            Stmt::KeycodeDef(def) => def.merge,
            Stmt::KeyAliasDef(def) => def.merge,
            Stmt::VModDef(def) => def.merge,
            Stmt::VarDef(def) => def.merge,
            Stmt::InterpDef(def) => def.merge,
            Stmt::KeyTypeDef(def) => def.merge,
            Stmt::SymbolsDef(def) => def.merge,
            Stmt::GroupCompatDef(def) => def.merge,
            Stmt::ModMapDef(def) => def.merge,
            Stmt::IndicatorMapDef(def) => def.merge,
            Stmt::IndicatorNameDef(def) => def.merge,
        };
        Some(merge)
    }

    fn merge_slot(&mut self) -> Option<&mut MergeMode> {
        let slot = match self {
            Stmt::Expr(_) => return None,
            Stmt::Include(chain) => return chain.first_mut().map(|incl| &mut incl.merge),
            Stmt::KeycodeDef(def) => &mut def.merge,
            Stmt::KeyAliasDef(def) => &mut def.merge,
            Stmt::VModDef(def) => &mut def.merge,
            Stmt::VarDef(def) => &mut def.merge,
            Stmt::InterpDef(def) => &mut def.merge,
            Stmt::KeyTypeDef(def) => &mut def.merge,
            Stmt::SymbolsDef(def) => &mut def.merge,
            Stmt::GroupCompatDef(def) => &mut def.merge,
            Stmt::ModMapDef(def) => &mut def.merge,
            Stmt::IndicatorMapDef(def) => &mut def.merge,
            Stmt::IndicatorNameDef(def) => &mut def.merge,
        };
        Some(slot)
    }

    /// Validates `merge` for this statement and stores the result.
    ///
    /// Returns the mode actually stored, or `None` for expressions, which
    /// carry no merge mode.
    pub fn apply_merge(
        &mut self,
        merge: MergeMode,
        loc: Option<Location>,
        diagnostics: &mut Diagnostics,
    ) -> Option<MergeMode> {
        let merge = stmt_set_merge(&*self, merge, loc, diagnostics);
        let slot = self.merge_slot()?;
        *slot = merge;
        Some(merge)
    }
}

impl Statement for Stmt {
    fn stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expr(_) => StmtType::Expr,
            Stmt::KeycodeDef(_) => StmtType::KeycodeDef,
            Stmt::KeyAliasDef(_) => StmtType::KeyAliasDef,
            Stmt::VModDef(_) => StmtType::VModDef,
            Stmt::VarDef(_) => StmtType::VarDef,
            Stmt::InterpDef(_) => StmtType::InterpDef,
            Stmt::KeyTypeDef(_) => StmtType::KeyTypeDef,
            Stmt::SymbolsDef(_) => StmtType::SymbolsDef,
            Stmt::GroupCompatDef(_) => StmtType::GroupCompatDef,
            Stmt::ModMapDef(_) => StmtType::ModMapDef,
            Stmt::IndicatorMapDef(_) => StmtType::IndicatorMapDef,
            Stmt::IndicatorNameDef(_) => StmtType::IndicatorNameDef,
            Stmt::Include(_) => StmtType::Include,
        }
    }
}

macro_rules! statement_kind {
    ($($def:ident),* $(,)?) => {
        $(
            impl Statement for $def {
                fn stmt_type(&self) -> StmtType {
                    StmtType::$def
                }
            }

            impl From<$def> for Stmt {
                fn from(def: $def) -> Self {
                    Stmt::$def(def)
                }
            }
        )*
    };
}

statement_kind!(
    KeycodeDef,
    KeyAliasDef,
    VModDef,
    VarDef,
    InterpDef,
    KeyTypeDef,
    SymbolsDef,
    GroupCompatDef,
    ModMapDef,
    IndicatorMapDef,
    IndicatorNameDef,
);

impl From<ExprDef> for Stmt {
    fn from(def: ExprDef) -> Self {
        Stmt::Expr(def)
    }
}

impl From<Chain<IncludeStmt>> for Stmt {
    fn from(chain: Chain<IncludeStmt>) -> Self {
        Stmt::Include(chain)
    }
}

impl<T: Into<Stmt>> Node<T> {
    /// Rewraps a typed node, and everything chained after it, as statements.
    pub fn into_stmt(self: Box<Self>) -> Box<Node<Stmt>> {
        let Node { def, next } = *self;
        Box::new(Node {
            def: def.into(),
            next: next.map(Into::into),
        })
    }
}

/// Checks whether `merge` is legal on `stmt`.
///
/// `alternate` is only accepted on key name definitions. Anywhere else an
/// error is recorded and the mode falls back to [`MergeMode::Default`].
pub fn stmt_set_merge<S: Statement + ?Sized>(
    stmt: &S,
    merge: MergeMode,
    loc: Option<Location>,
    diagnostics: &mut Diagnostics,
) -> MergeMode {
    let kind = stmt.stmt_type();
    if merge == MergeMode::AltForm && kind != StmtType::KeycodeDef {
        diagnostics.report(&XkbError::IllegalMergeMode(kind), loc);
        return MergeMode::Default;
    }
    merge
}

pub fn keycode_create(name: &str, value: u64) -> Box<Node<KeycodeDef>> {
    Node::new(KeycodeDef {
        merge: MergeMode::Default,
        name: KeyName::new(name),
        value,
    })
}

pub fn key_alias_create(alias: &str, real: &str) -> Box<Node<KeyAliasDef>> {
    Node::new(KeyAliasDef {
        merge: MergeMode::Default,
        alias: KeyName::new(alias),
        real: KeyName::new(real),
    })
}

pub fn vmod_create(name: impl Into<String>, value: Chain<ExprDef>) -> Box<Node<VModDef>> {
    Node::new(VModDef {
        merge: MergeMode::Default,
        name: name.into(),
        value,
    })
}

pub fn var_create(name: Chain<ExprDef>, value: Chain<ExprDef>) -> Box<Node<VarDef>> {
    Node::new(VarDef {
        merge: MergeMode::Default,
        name,
        value,
    })
}

/// `name;` or `!name;` shorthand: assigns a boolean to an identifier.
pub fn bool_var_create(name: impl Into<String>, set: bool) -> Box<Node<VarDef>> {
    let name = expr_create_ident(name);
    let value = expr_create_value(Value::Boolean(set));
    var_create(Chain::from(name), Chain::from(value))
}

pub fn interp_create(sym: impl Into<String>, match_expr: Chain<ExprDef>) -> Box<Node<InterpDef>> {
    Node::new(InterpDef {
        merge: MergeMode::Default,
        sym: sym.into(),
        match_expr,
        body: Chain::new(),
    })
}

pub fn key_type_create(name: impl Into<String>, body: Chain<VarDef>) -> Box<Node<KeyTypeDef>> {
    Node::new(KeyTypeDef {
        merge: MergeMode::Default,
        name: name.into(),
        body,
    })
}

pub fn symbols_create(key_name: &str, symbols: Chain<Stmt>) -> Box<Node<SymbolsDef>> {
    Node::new(SymbolsDef {
        merge: MergeMode::Default,
        key_name: KeyName::new(key_name),
        symbols,
    })
}

pub fn group_compat_create(group: u32, def: Chain<ExprDef>) -> Box<Node<GroupCompatDef>> {
    Node::new(GroupCompatDef {
        merge: MergeMode::Default,
        group,
        def,
    })
}

pub fn mod_map_create(modifier: impl Into<String>, keys: Chain<ExprDef>) -> Box<Node<ModMapDef>> {
    Node::new(ModMapDef {
        merge: MergeMode::Default,
        modifier: modifier.into(),
        keys,
    })
}

pub fn indicator_map_create(name: impl Into<String>, body: Chain<VarDef>) -> Box<Node<IndicatorMapDef>> {
    Node::new(IndicatorMapDef {
        merge: MergeMode::Default,
        name: name.into(),
        body,
    })
}

pub fn indicator_name_create(ndx: u32, name: Chain<ExprDef>, is_virtual: bool) -> Box<Node<IndicatorNameDef>> {
    Node::new(IndicatorNameDef {
        merge: MergeMode::Default,
        ndx,
        name,
        is_virtual,
    })
}
