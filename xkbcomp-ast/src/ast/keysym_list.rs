//! Per-key symbol table: a jagged levels × alternates layout in flat arrays.
//!
//! `syms` holds every symbol name of every level back to back. For level `i`,
//! `syms_map_index[i]` is where its symbols start (or -1 when the level is
//! empty) and `syms_num_entries[i]` is how many there are. All three arrays
//! are kept at their allocated size; slots past the counts are blank.

use xkbcomp_core::{Result, XkbError};

use super::chain::Node;
use super::expr::{expr_node, ExprDef, ExprKind, ValueType};

const MIN_CAPACITY: usize = 4;

#[derive(Debug, Default)]
pub struct KeysymList {
    n_syms: usize,
    n_levels: usize,
    syms: Vec<Option<String>>,
    syms_map_index: Vec<i32>,
    syms_num_entries: Vec<u32>,
}

impl KeysymList {
    /// An empty list with no capacity in either dimension.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_syms(&self) -> usize {
        self.n_syms
    }

    pub fn n_levels(&self) -> usize {
        self.n_levels
    }

    /// Allocated symbol slots.
    pub fn sz_syms(&self) -> usize {
        self.syms.len()
    }

    /// Allocated level slots.
    pub fn sz_levels(&self) -> usize {
        self.syms_map_index.len()
    }

    pub fn syms_map_index(&self) -> &[i32] {
        &self.syms_map_index[..self.n_levels]
    }

    pub fn syms_num_entries(&self) -> &[u32] {
        &self.syms_num_entries[..self.n_levels]
    }

    /// Symbol names in storage order. Moved-out slots are skipped.
    pub fn syms(&self) -> impl Iterator<Item = &str> + '_ {
        self.syms[..self.n_syms].iter().filter_map(|sym| sym.as_deref())
    }

    /// Symbols of one level; empty for unpopulated or out-of-range levels.
    pub fn level(&self, level: usize) -> Vec<&str> {
        if level >= self.n_levels {
            return Vec::new();
        }
        let start = self.syms_map_index[level];
        if start < 0 {
            return Vec::new();
        }
        let start = start as usize;
        let end = (start + self.syms_num_entries[level] as usize).min(self.n_syms);
        self.syms[start..end].iter().filter_map(|sym| sym.as_deref()).collect()
    }

    pub fn levels(&self) -> Vec<Vec<&str>> {
        (0..self.n_levels).map(|level| self.level(level)).collect()
    }

    /// Makes room for `extra` more symbols and one more level.
    ///
    /// Symbol capacity doubles and then grows by `extra`; level capacity only
    /// doubles, since every caller adds at most one level at a time.
    fn resize(&mut self, extra: usize) -> Result<()> {
        if self.n_syms + extra > self.sz_syms() {
            let old = self.sz_syms();
            let mut size = old * 2 + extra;
            if old == 0 {
                size = size.max(MIN_CAPACITY);
            }
            self.syms
                .try_reserve_exact(size - old)
                .map_err(|_| XkbError::Alloc("list of symbols"))?;
            self.syms.resize_with(size, || None);
        }

        if self.n_levels >= self.sz_levels() {
            let old = self.sz_levels();
            let size = if old == 0 { MIN_CAPACITY } else { old * 2 };
            self.syms_map_index
                .try_reserve_exact(size - old)
                .map_err(|_| XkbError::Alloc("keysym index map"))?;
            self.syms_num_entries
                .try_reserve_exact(size - old)
                .map_err(|_| XkbError::Alloc("num keysym entries"))?;
            self.syms_map_index.resize(size, -1);
            self.syms_num_entries.resize(size, 0);
            for level in self.n_levels..size {
                self.syms_map_index[level] = -1;
                self.syms_num_entries[level] = 0;
            }
        }

        Ok(())
    }

    /// Adds `sym` as a new level of its own.
    pub fn push_level(&mut self, sym: String) -> Result<()> {
        self.resize(1)?;
        self.syms_map_index[self.n_levels] = self.n_syms as i32;
        self.syms_num_entries[self.n_levels] = 1;
        self.syms[self.n_syms] = Some(sym);
        self.n_syms += 1;
        self.n_levels += 1;
        Ok(())
    }

    /// Moves every symbol of `other` into one new level of `self`.
    ///
    /// `other`'s slots are emptied as they are taken, so dropping it afterwards
    /// releases only its arrays.
    pub fn push_multi_level(&mut self, other: &mut KeysymList) -> Result<()> {
        let count = other.n_syms;
        self.resize(count)?;
        self.syms_map_index[self.n_levels] = self.n_syms as i32;
        self.syms_num_entries[self.n_levels] = count as u32;
        for slot in other.syms[..count].iter_mut() {
            self.syms[self.n_syms] = slot.take();
            self.n_syms += 1;
        }
        self.n_levels += 1;
        Ok(())
    }

    /// Reinterprets the list as a single level holding all symbols as alternates.
    pub fn collapse_to_multi(&mut self) {
        if self.sz_levels() == 0 {
            return;
        }
        for level in 1..self.sz_levels() {
            self.syms_map_index[level] = -1;
            self.syms_num_entries[level] = 0;
        }
        self.syms_map_index[0] = 0;
        self.syms_num_entries[0] = self.n_syms as u32;
        self.n_levels = 1;
    }

    /// Drops every owned symbol name, returning how many were released.
    pub(crate) fn release_syms(&mut self) -> usize {
        let released = self.syms[..self.n_syms].iter_mut().filter_map(Option::take).count();
        self.syms = Vec::new();
        self.syms_map_index = Vec::new();
        self.syms_num_entries = Vec::new();
        self.n_syms = 0;
        self.n_levels = 0;
        released
    }
}

fn list_of(expr: &mut Node<ExprDef>) -> Result<&mut KeysymList> {
    let name = expr.def.op_name();
    expr.def.keysym_list_mut().ok_or(XkbError::NotAKeysymList(name))
}

/// A keysym-list expression holding `sym` as its only level.
pub fn create_keysym_list(sym: impl Into<String>) -> Result<Box<Node<ExprDef>>> {
    let mut list = KeysymList::new();
    list.push_level(sym.into())?;
    Ok(expr_node(ExprKind::KeysymList(list), ValueType::Symbols))
}

/// Appends `sym` to `list` as a new level.
pub fn append_keysym_list(mut list: Box<Node<ExprDef>>, sym: impl Into<String>) -> Result<Box<Node<ExprDef>>> {
    list_of(&mut list)?.push_level(sym.into())?;
    Ok(list)
}

/// Appends all of `append`'s symbols to `list` as one level, consuming `append`.
pub fn append_multi_keysym_list(
    mut list: Box<Node<ExprDef>>,
    mut append: Box<Node<ExprDef>>,
) -> Result<Box<Node<ExprDef>>> {
    let source = list_of(&mut append)?;
    list_of(&mut list)?.push_multi_level(source)?;
    drop(append);
    Ok(list)
}

/// Turns a one-symbol-per-level list into a single level of alternates.
pub fn create_multi_keysym_list(mut list: Box<Node<ExprDef>>) -> Result<Box<Node<ExprDef>>> {
    list_of(&mut list)?.collapse_to_multi();
    Ok(list)
}
