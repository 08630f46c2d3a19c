use std::fmt;

/// Kind tag carried by every node of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtType {
    Include,
    KeycodeDef,
    KeyAliasDef,
    Expr,
    VarDef,
    KeyTypeDef,
    InterpDef,
    VModDef,
    SymbolsDef,
    ModMapDef,
    GroupCompatDef,
    IndicatorMapDef,
    IndicatorNameDef,
}

impl StmtType {
    pub fn name(&self) -> &'static str {
        match self {
            StmtType::Include => "include statement",
            StmtType::KeycodeDef => "key name definition",
            StmtType::KeyAliasDef => "key alias definition",
            StmtType::Expr => "expression",
            StmtType::VarDef => "variable definition",
            StmtType::KeyTypeDef => "key type definition",
            StmtType::InterpDef => "symbol interpretation definition",
            StmtType::VModDef => "virtual modifiers definition",
            StmtType::SymbolsDef => "key symbols definition",
            StmtType::ModMapDef => "modifier map declaration",
            StmtType::GroupCompatDef => "group declaration",
            StmtType::IndicatorMapDef => "indicator map declaration",
            StmtType::IndicatorNameDef => "indicator name definition",
        }
    }
}

impl fmt::Display for StmtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a file container.
///
/// `Keymap`, `Semantics` and `Layout` nest further containers; the rest hold
/// statement lists directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Keymap,
    Semantics,
    Layout,
    Types,
    CompatMap,
    Symbols,
    Keycodes,
    Geometry,
    GeometryFile,
}

impl FileType {
    pub fn is_composite(&self) -> bool {
        matches!(self, FileType::Keymap | FileType::Semantics | FileType::Layout)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            FileType::Keymap => "xkb_keymap",
            FileType::Semantics => "xkb_semantics",
            FileType::Layout => "xkb_layout",
            FileType::Types => "xkb_types",
            FileType::CompatMap => "xkb_compatibility",
            FileType::Symbols => "xkb_symbols",
            FileType::Keycodes => "xkb_keycodes",
            FileType::Geometry => "xkb_geometry",
            FileType::GeometryFile => "geometry",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// Map flags carried by file containers
pub const LC_HIDDEN: u32 = 1 << 0;
pub const LC_DEFAULT: u32 = 1 << 1;
pub const LC_PARTIAL: u32 = 1 << 2;

pub const LC_ALPHANUMERIC_KEYS: u32 = 1 << 8;
pub const LC_MODIFIER_KEYS: u32 = 1 << 9;
pub const LC_KEYPAD_KEYS: u32 = 1 << 10;
pub const LC_FUNCTION_KEYS: u32 = 1 << 11;
pub const LC_ALTERNATE_GROUP: u32 = 1 << 12;
