mod common;

use common::*;
use pretty_assertions::assert_eq;
use xkbcomp_ast::*;

fn three_sections(factory: &mut FileFactory) -> Chain<XkbFile> {
    let basic = symbols_section(factory, "basic", LC_DEFAULT, &[("AE01", &["1", "exclam"])]);
    let intl = symbols_section(factory, "intl", LC_PARTIAL, &[("AC01", &["a", "A"])]);
    let dvorak = symbols_section(factory, "dvorak", LC_DEFAULT | LC_PARTIAL, &[("AD01", &["apostrophe"])]);
    Chain::from(basic).append(Chain::from(intl)).append(Chain::from(dvorak))
}

#[test]
fn test_only_first_default_survives() {
    let mut factory = FileFactory::default();
    let mut diagnostics = Diagnostics::new();
    let mut maps = three_sections(&mut factory);

    let demoted = factory.check_default_map(&mut maps, Some("us"), &mut diagnostics);

    assert_eq!(demoted, 1);
    assert_eq!(section_names(&maps), vec!["*basic", "intl", "dvorak"]);
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(
        diagnostics.iter().next().unwrap().message,
        "Multiple default components in us; using basic, ignoring dvorak"
    );
}

#[test]
fn test_other_flags_are_untouched() {
    let mut factory = FileFactory::default();
    let mut diagnostics = Diagnostics::new();
    let mut maps = three_sections(&mut factory);

    factory.check_default_map(&mut maps, None, &mut diagnostics);

    let flags: Vec<u32> = maps.iter().map(|map| map.flags).collect();
    assert_eq!(flags, vec![LC_DEFAULT, LC_PARTIAL, LC_PARTIAL]);
}

#[test]
fn test_unnamed_sections_in_warning() {
    let mut factory = FileFactory::default();
    let mut diagnostics = Diagnostics::new();
    let first = factory.create_xkb_file(FileType::Types, None, FileDefs::Stmts(Chain::new()), LC_DEFAULT).unwrap();
    let second = factory.create_xkb_file(FileType::Types, None, FileDefs::Stmts(Chain::new()), LC_DEFAULT).unwrap();
    let mut maps = Chain::from(first).append(Chain::from(second));

    factory.check_default_map(&mut maps, None, &mut diagnostics);

    assert_eq!(
        diagnostics.iter().next().unwrap().message,
        "Multiple default components in (unknown); using (first), ignoring (subsequent)"
    );
}

#[test]
fn test_warning_level_silences_report() {
    let options = ParseOptions::new().with_warning_level(0);
    let mut factory = FileFactory::new(options);
    let mut diagnostics = Diagnostics::new();
    let mut maps = three_sections(&mut factory);

    let demoted = check_default_map(&mut maps, Some("us"), factory.options(), &mut diagnostics);

    assert_eq!(demoted, 1);
    assert_eq!(diagnostics.warning_count(), 0);
    assert_eq!(section_names(&maps), vec!["*basic", "intl", "dvorak"]);
}

#[test]
fn test_no_default_sections() {
    let mut factory = FileFactory::default();
    let mut diagnostics = Diagnostics::new();
    let mut maps = Chain::from(symbols_section(&mut factory, "basic", 0, &[]));

    assert_eq!(factory.check_default_map(&mut maps, Some("us"), &mut diagnostics), 0);
    assert_eq!(section_names(&maps), vec!["basic"]);
}

#[test]
fn test_file_ids_follow_creation_order() {
    let mut factory = FileFactory::default();
    let maps = three_sections(&mut factory);
    let ids: Vec<u32> = maps.iter().map(|map| map.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    let keymap = factory.create_xkb_file(FileType::Keymap, Some("pc".to_string()), FileDefs::Files(maps), 0).unwrap();
    assert_eq!(keymap.def.id, 3);
    assert!(keymap.def.file_type.is_composite());
    assert_eq!(keymap.def.sections().map(Chain::len), Some(3));
    assert!(keymap.def.stmts().is_none());

    let other = FileFactory::default();
    assert_eq!(other.next_id(), 0);
}

#[test]
fn test_map_names_are_sanitized() {
    let mut factory = FileFactory::default();
    let file = factory.create_xkb_file(
        FileType::Keycodes,
        Some("evdev aliases*".to_string()),
        FileDefs::Stmts(Chain::new()),
        LC_HIDDEN,
    )
    .unwrap();

    assert_eq!(file.def.name.as_deref(), Some("evdev_aliases_"));
    assert_eq!(file.def.top_name, file.def.name);
    assert!(!file.def.is_default());
    assert!(file.def.defs().is_empty());
}
