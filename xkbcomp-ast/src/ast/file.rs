use xkbcomp_core::{FileType, Result, XkbError, LC_DEFAULT};

use super::chain::{Chain, Node};
use super::stmt::Stmt;
use crate::diagnostics::Diagnostics;
use crate::options::{ParseOptions, DEFAULT_MAP_WARNING_LEVEL};

/// Contents of a file container.
#[derive(Debug)]
pub enum FileDefs {
    /// Sections of a keymap, semantics or layout file.
    Files(Chain<XkbFile>),
    /// Statements of a single component section.
    Stmts(Chain<Stmt>),
}

impl FileDefs {
    /// Whether these contents are sections rather than statements.
    pub fn is_sections(&self) -> bool {
        matches!(self, FileDefs::Files(_))
    }

    fn describe(&self) -> &'static str {
        match self {
            FileDefs::Files(_) => "nested sections",
            FileDefs::Stmts(_) => "statements",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FileDefs::Files(files) => files.is_empty(),
            FileDefs::Stmts(stmts) => stmts.is_empty(),
        }
    }
}

/// A named section of a keymap source file.
///
/// Keymap, semantics and layout files hold sections; every other kind holds
/// statements. The contents are only reachable through accessors so the
/// pairing set up by [`FileFactory::create_xkb_file`] cannot change.
#[derive(Debug)]
pub struct XkbFile {
    pub file_type: FileType,
    pub name: Option<String>,
    pub top_name: Option<String>,
    pub flags: u32,
    pub id: u32,
    pub(crate) defs: FileDefs,
}

impl XkbFile {
    pub fn is_default(&self) -> bool {
        self.flags & LC_DEFAULT != 0
    }

    pub fn sections(&self) -> Option<&Chain<XkbFile>> {
        match &self.defs {
            FileDefs::Files(files) => Some(files),
            FileDefs::Stmts(_) => None,
        }
    }

    pub fn stmts(&self) -> Option<&Chain<Stmt>> {
        match &self.defs {
            FileDefs::Stmts(stmts) => Some(stmts),
            FileDefs::Files(_) => None,
        }
    }

    pub fn defs(&self) -> &FileDefs {
        &self.defs
    }

    pub fn sections_mut(&mut self) -> Option<&mut Chain<XkbFile>> {
        match &mut self.defs {
            FileDefs::Files(files) => Some(files),
            FileDefs::Stmts(_) => None,
        }
    }

    pub fn stmts_mut(&mut self) -> Option<&mut Chain<Stmt>> {
        match &mut self.defs {
            FileDefs::Stmts(stmts) => Some(stmts),
            FileDefs::Files(_) => None,
        }
    }
}

/// Replaces characters that may not appear in a map name with `_`.
pub fn ensure_safe_map_name(name: &mut String) {
    if name.chars().all(is_legal_map_char) {
        return;
    }
    *name = name
        .chars()
        .map(|c| if is_legal_map_char(c) { c } else { '_' })
        .collect();
}

fn is_legal_map_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '%' | '(' | ')' | '.' | '/')
}

/// Creates file containers and hands out their ids.
///
/// Ids increase by one per container, starting at zero for each factory.
#[derive(Debug, Default)]
pub struct FileFactory {
    next_id: u32,
    options: ParseOptions,
}

impl FileFactory {
    pub fn new(options: ParseOptions) -> Self {
        Self { next_id: 0, options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Id the next container will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Creates a container, or fails if `defs` does not suit `file_type`.
    ///
    /// A rejected call consumes no id.
    pub fn create_xkb_file(
        &mut self,
        file_type: FileType,
        name: Option<String>,
        defs: FileDefs,
        flags: u32,
    ) -> Result<Box<Node<XkbFile>>> {
        if file_type.is_composite() != defs.is_sections() {
            return Err(XkbError::FileContents {
                file_type,
                found: defs.describe(),
            });
        }

        let name = name.map(|mut name| {
            ensure_safe_map_name(&mut name);
            name
        });
        let id = self.next_id;
        self.next_id += 1;

        Ok(Node::new(XkbFile {
            file_type,
            top_name: name.clone(),
            name,
            flags,
            id,
            defs,
        }))
    }

    /// Keeps the default flag on the first default section only.
    ///
    /// Returns how many sections lost the flag.
    pub fn check_default_map(
        &self,
        maps: &mut Chain<XkbFile>,
        file_name: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> usize {
        check_default_map(maps, file_name, &self.options, diagnostics)
    }
}

/// Clears the default flag from every default-marked section after the first.
pub fn check_default_map(
    maps: &mut Chain<XkbFile>,
    file_name: Option<&str>,
    options: &ParseOptions,
    diagnostics: &mut Diagnostics,
) -> usize {
    let mut have_default = false;
    let mut kept: Option<String> = None;
    let mut demoted = 0;

    for map in maps.iter_mut() {
        if !map.is_default() {
            continue;
        }
        if !have_default {
            have_default = true;
            kept = map.name.clone();
            continue;
        }
        if options.warns_at(DEFAULT_MAP_WARNING_LEVEL) {
            diagnostics.warning(
                format!(
                    "Multiple default components in {}; using {}, ignoring {}",
                    file_name.unwrap_or("(unknown)"),
                    kept.as_deref().unwrap_or("(first)"),
                    map.name.as_deref().unwrap_or("(subsequent)"),
                ),
                None,
            );
        }
        map.flags &= !LC_DEFAULT;
        demoted += 1;
    }

    demoted
}
