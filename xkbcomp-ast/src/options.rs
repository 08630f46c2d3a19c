/// Warning level used when none is configured, matching xkbcomp's `-w` default.
pub const DEFAULT_WARNING_LEVEL: u8 = 5;

/// Minimum warning level at which duplicate default sections are reported.
pub const DEFAULT_MAP_WARNING_LEVEL: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// 0 silences warnings; higher values report progressively minor issues.
    pub warning_level: u8,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self {
            warning_level: DEFAULT_WARNING_LEVEL,
        }
    }

    pub fn with_warning_level(mut self, level: u8) -> Self {
        self.warning_level = level;
        self
    }

    pub fn warns_at(&self, level: u8) -> bool {
        self.warning_level >= level
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
