use xkbcomp_core::{KeyName, StmtType};

use super::chain::{Chain, Node, Statement};
use super::keysym_list::KeysymList;

/// Type an expression evaluates to, as far as the parser can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Unknown,
    Boolean,
    Int,
    String,
    Action,
    KeyName,
    Symbols,
}

/// Flat operator tag of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprOp {
    Value,
    Ident,
    ActionDecl,
    FieldRef,
    ArrayRef,
    KeysymList,
    ActionList,
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
    Not,
    Negate,
    Invert,
    UnaryPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Negate,
    Invert,
    UnaryPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    String(String),
    KeyName(KeyName),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Int(_) => ValueType::Int,
            Value::String(_) => ValueType::String,
            Value::KeyName(_) => ValueType::KeyName,
        }
    }
}

#[derive(Debug)]
pub enum ExprKind {
    Value(Value),
    Ident(String),
    FieldRef {
        element: String,
        field: String,
    },
    ArrayRef {
        element: Option<String>,
        field: String,
        entry: Box<Node<ExprDef>>,
    },
    ActionDecl {
        name: String,
        args: Chain<ExprDef>,
    },
    ActionList(Chain<ExprDef>),
    KeysymList(KeysymList),
    Unary {
        op: UnaryOp,
        child: Box<Node<ExprDef>>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node<ExprDef>>,
        right: Box<Node<ExprDef>>,
    },
}

#[derive(Debug)]
pub struct ExprDef {
    pub kind: ExprKind,
    pub value_type: ValueType,
}

impl ExprDef {
    pub fn op(&self) -> ExprOp {
        match &self.kind {
            ExprKind::Value(_) => ExprOp::Value,
            ExprKind::Ident(_) => ExprOp::Ident,
            ExprKind::FieldRef { .. } => ExprOp::FieldRef,
            ExprKind::ArrayRef { .. } => ExprOp::ArrayRef,
            ExprKind::ActionDecl { .. } => ExprOp::ActionDecl,
            ExprKind::ActionList(_) => ExprOp::ActionList,
            ExprKind::KeysymList(_) => ExprOp::KeysymList,
            ExprKind::Unary { op, .. } => match op {
                UnaryOp::Not => ExprOp::Not,
                UnaryOp::Negate => ExprOp::Negate,
                UnaryOp::Invert => ExprOp::Invert,
                UnaryOp::UnaryPlus => ExprOp::UnaryPlus,
            },
            ExprKind::Binary { op, .. } => match op {
                BinaryOp::Add => ExprOp::Add,
                BinaryOp::Subtract => ExprOp::Subtract,
                BinaryOp::Multiply => ExprOp::Multiply,
                BinaryOp::Divide => ExprOp::Divide,
                BinaryOp::Assign => ExprOp::Assign,
            },
        }
    }

    /// Short lowercase name of the operator, used in diagnostics.
    pub fn op_name(&self) -> &'static str {
        match self.op() {
            ExprOp::Value => "value",
            ExprOp::Ident => "identifier",
            ExprOp::ActionDecl => "action declaration",
            ExprOp::FieldRef => "field reference",
            ExprOp::ArrayRef => "array reference",
            ExprOp::KeysymList => "keysym list",
            ExprOp::ActionList => "action list",
            ExprOp::Add => "addition",
            ExprOp::Subtract => "subtraction",
            ExprOp::Multiply => "multiplication",
            ExprOp::Divide => "division",
            ExprOp::Assign => "assignment",
            ExprOp::Not => "logical not",
            ExprOp::Negate => "negation",
            ExprOp::Invert => "bitwise inversion",
            ExprOp::UnaryPlus => "unary plus",
        }
    }

    pub fn keysym_list(&self) -> Option<&KeysymList> {
        match &self.kind {
            ExprKind::KeysymList(list) => Some(list),
            _ => None,
        }
    }

    pub fn keysym_list_mut(&mut self) -> Option<&mut KeysymList> {
        match &mut self.kind {
            ExprKind::KeysymList(list) => Some(list),
            _ => None,
        }
    }
}

impl Statement for ExprDef {
    fn stmt_type(&self) -> StmtType {
        StmtType::Expr
    }
}

/// Result type of `left op right`.
///
/// Assignment, or a left side of unknown type, takes the right side's type.
/// Otherwise matching types (or an unknown right side) keep the left side's
/// type, and a genuine mismatch is left for the compiler to report.
pub fn binary_result_type(op: BinaryOp, left: ValueType, right: ValueType) -> ValueType {
    if op == BinaryOp::Assign || left == ValueType::Unknown {
        right
    } else if left == right || right == ValueType::Unknown {
        left
    } else {
        ValueType::Unknown
    }
}

pub(crate) fn expr_node(kind: ExprKind, value_type: ValueType) -> Box<Node<ExprDef>> {
    Node::new(ExprDef { kind, value_type })
}

pub fn expr_create_value(value: Value) -> Box<Node<ExprDef>> {
    let value_type = value.value_type();
    expr_node(ExprKind::Value(value), value_type)
}

pub fn expr_create_ident(name: impl Into<String>) -> Box<Node<ExprDef>> {
    expr_node(ExprKind::Ident(name.into()), ValueType::Unknown)
}

pub fn expr_create_field_ref(element: impl Into<String>, field: impl Into<String>) -> Box<Node<ExprDef>> {
    expr_node(
        ExprKind::FieldRef {
            element: element.into(),
            field: field.into(),
        },
        ValueType::Unknown,
    )
}

pub fn expr_create_array_ref(
    element: Option<String>,
    field: impl Into<String>,
    entry: Box<Node<ExprDef>>,
) -> Box<Node<ExprDef>> {
    expr_node(
        ExprKind::ArrayRef {
            element,
            field: field.into(),
            entry,
        },
        ValueType::Unknown,
    )
}

pub fn expr_create_unary(op: UnaryOp, value_type: ValueType, child: Box<Node<ExprDef>>) -> Box<Node<ExprDef>> {
    expr_node(ExprKind::Unary { op, child }, value_type)
}

pub fn expr_create_binary(op: BinaryOp, left: Box<Node<ExprDef>>, right: Box<Node<ExprDef>>) -> Box<Node<ExprDef>> {
    let value_type = binary_result_type(op, left.def.value_type, right.def.value_type);
    expr_node(ExprKind::Binary { op, left, right }, value_type)
}

pub fn expr_create_action_list(actions: Chain<ExprDef>) -> Box<Node<ExprDef>> {
    expr_node(ExprKind::ActionList(actions), ValueType::Action)
}

pub fn action_create(name: impl Into<String>, args: Chain<ExprDef>) -> Box<Node<ExprDef>> {
    expr_node(
        ExprKind::ActionDecl {
            name: name.into(),
            args,
        },
        ValueType::Action,
    )
}
