#![allow(dead_code)]

use xkbcomp_ast::*;

/// Keysym-list expression holding one level per name.
pub fn keysyms(names: &[&str]) -> Box<Node<ExprDef>> {
    let (first, rest) = names.split_first().expect("at least one keysym");
    let mut list = create_keysym_list(*first).unwrap();
    for name in rest {
        list = append_keysym_list(list, *name).unwrap();
    }
    list
}

pub fn int(value: i64) -> Box<Node<ExprDef>> {
    expr_create_value(Value::Int(value))
}

pub fn ident(name: &str) -> Box<Node<ExprDef>> {
    expr_create_ident(name)
}

/// `name = value;`
pub fn assign(name: &str, value: Box<Node<ExprDef>>) -> Box<Node<VarDef>> {
    var_create(Chain::from(ident(name)), Chain::from(value))
}

/// `key <KEY> { [ names ] };`
pub fn key_symbols(key: &str, names: &[&str]) -> Box<Node<Stmt>> {
    let levels = var_create(Chain::new(), Chain::from(keysyms(names))).into_stmt();
    symbols_create(key, Chain::from(levels)).into_stmt()
}

/// Builds a statement chain from nodes, keeping their order.
pub fn stmts(nodes: Vec<Box<Node<Stmt>>>) -> Chain<Stmt> {
    nodes
        .into_iter()
        .fold(Chain::new(), |chain, node| append_stmt(chain, Chain::from(node)))
}

/// A symbols section with the given flags and one key per entry of `keys`.
pub fn symbols_section(
    factory: &mut FileFactory,
    name: &str,
    flags: u32,
    keys: &[(&str, &[&str])],
) -> Box<Node<XkbFile>> {
    let body = stmts(keys.iter().map(|(key, names)| key_symbols(key, names)).collect());
    factory.create_xkb_file(FileType::Symbols, Some(name.to_string()), FileDefs::Stmts(body), flags)
        .unwrap()
}

/// Names of every section in order, with `*` marking default sections.
pub fn section_names(maps: &Chain<XkbFile>) -> Vec<String> {
    maps.iter()
        .map(|map| {
            let name = map.name.clone().unwrap_or_default();
            if map.is_default() {
                format!("*{}", name)
            } else {
                name
            }
        })
        .collect()
}
