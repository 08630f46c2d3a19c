mod common;

use common::*;
use xkbcomp_ast::*;

/// `type "TWO_LEVEL" { modifiers = Shift; level_name = 2; };`
fn two_level_type() -> Box<Node<Stmt>> {
    let body = Chain::from(assign("modifiers", ident("Shift"))).append(Chain::from(assign("level_name", int(2))));
    key_type_create("TWO_LEVEL", body).into_stmt()
}

/// `interpret Num_Lock+AnyOfOrNone(all) { action = LockMods(modifiers = NumLock); };`
fn num_lock_interp() -> Box<Node<Stmt>> {
    let matcher = action_create("AnyOfOrNone", Chain::from(ident("all")));
    let mut interp = interp_create("Num_Lock", Chain::from(matcher));
    let lock = action_create(
        "LockMods",
        Chain::from(expr_create_binary(BinaryOp::Assign, ident("modifiers"), ident("NumLock"))),
    );
    interp.def.body = Chain::from(assign("action", lock));
    interp.into_stmt()
}

#[test]
fn test_empty_chains_free_nothing() {
    assert_eq!(free_stmt(Chain::new()), 0);
    assert_eq!(free_expr(Chain::new()), 0);
    assert_eq!(free_include(Chain::new()), 0);
    assert_eq!(free_var_defs(Chain::new()), 0);
    assert_eq!(free_xkb_file(Chain::new()), 0);
}

#[test]
fn test_leaf_statements() {
    let stmts = stmts(vec![
        keycode_create("AE01", 10).into_stmt(),
        key_alias_create("LatQ", "AD01").into_stmt(),
    ]);
    assert_eq!(free_stmt(stmts), 2);
}

#[test]
fn test_symbols_definition() {
    // symbols, the level array and its keysym list
    assert_eq!(free_stmt(Chain::from(key_symbols("AE01", &["1", "exclam"]))), 3);
}

#[test]
fn test_key_type_body() {
    // type, two assignments, a name and a value each
    assert_eq!(free_stmt(Chain::from(two_level_type())), 7);
}

#[test]
fn test_interpretation_releases_match_and_body() {
    // interp (1), match action and its argument (2),
    // assignment with name (2), action with an assignment argument (4)
    assert_eq!(free_stmt(Chain::from(num_lock_interp())), 9);
}

#[test]
fn test_remaining_statement_kinds() {
    let stmts = stmts(vec![
        vmod_create("NumLock", Chain::from(int(0x10))).into_stmt(),
        group_compat_create(2, Chain::from(ident("Mod5"))).into_stmt(),
        mod_map_create(
            "Lock",
            Chain::from(ident("Caps_Lock")).append(Chain::from(expr_create_value(Value::KeyName(KeyName::new("CAPS"))))),
        )
        .into_stmt(),
        indicator_map_create("Caps Lock", Chain::from(bool_var_create("allowExplicit", false))).into_stmt(),
        indicator_name_create(1, Chain::from(expr_create_value(Value::String("Caps Lock".into()))), false).into_stmt(),
        expr_create_unary(UnaryOp::Not, ValueType::Boolean, ident("repeat")).into_stmt(),
    ]);

    // 2 + 2 + 3 + 4 + 2 + 2
    assert_eq!(free_stmt(stmts), 15);
}

#[test]
fn test_include_statement_counts_include_nodes() {
    let chain = include_create("pc+us(intl):2|compose(ralt)", MergeMode::Default).unwrap();
    let stmts = Chain::from(include_stmt(chain).unwrap()).append(Chain::from(keycode_create("ESC", 9).into_stmt()));
    assert_eq!(free_stmt(stmts), 4);
}

#[test]
fn test_keymap_file_tree() {
    let mut factory = FileFactory::default();
    let types = factory.create_xkb_file(
        FileType::Types,
        Some("complete".to_string()),
        FileDefs::Stmts(Chain::from(two_level_type())),
        0,
    )
    .unwrap();
    let symbols = symbols_section(&mut factory, "us", LC_DEFAULT, &[("AE01", &["1"]), ("AE02", &["2"])]);
    let keymap = factory.create_xkb_file(
        FileType::Keymap,
        Some("pc".to_string()),
        FileDefs::Files(Chain::from(types).append(Chain::from(symbols))),
        0,
    )
    .unwrap();

    // keymap (1), types section (1 + 7), symbols section (1 + 3 + 3)
    assert_eq!(free_xkb_file(Chain::from(keymap)), 16);
}

#[test]
fn test_file_contents_follow_file_type() {
    let mut factory = FileFactory::default();

    let err = factory
        .create_xkb_file(FileType::Keymap, Some("pc".to_string()), FileDefs::Stmts(Chain::from(two_level_type())), 0)
        .unwrap_err();
    assert_eq!(err, XkbError::FileContents { file_type: FileType::Keymap, found: "statements" });

    let nested = Chain::from(symbols_section(&mut factory, "us", 0, &[]));
    assert!(factory.create_xkb_file(FileType::Symbols, None, FileDefs::Files(nested), 0).is_err());

    let de = Chain::from(symbols_section(&mut factory, "de", 0, &[]));
    let layout = factory.create_xkb_file(FileType::Layout, None, FileDefs::Files(de), 0).unwrap();
    assert!(layout.def.stmts().is_none());
    assert_eq!(free_xkb_file(Chain::from(layout)), 2);
}

#[test]
fn test_keysym_lists_with_moved_symbols() {
    let alternates = create_multi_keysym_list(keysyms(&["b", "c"])).unwrap();
    let expr = append_multi_keysym_list(keysyms(&["a"]), alternates).unwrap();
    assert_eq!(free_expr(Chain::from(expr)), 1);
}

#[test]
fn test_long_statement_list() {
    let stmts: Chain<Stmt> = (0..100_000u64)
        .map(|code| {
            Stmt::KeycodeDef(KeycodeDef {
                merge: MergeMode::Default,
                name: KeyName::new("I100"),
                value: code,
            })
        })
        .collect();
    assert_eq!(free_stmt(stmts), 100_000);
}
