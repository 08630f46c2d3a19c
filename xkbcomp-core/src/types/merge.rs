use std::fmt;

/// How a statement combines with definitions of the same thing seen earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeMode {
    #[default]
    Default,
    Augment,
    Override,
    Replace,
    /// `alternate`, only meaningful for keycode definitions.
    AltForm,
}

impl MergeMode {
    /// Merge mode selected by the operator that follows an include segment.
    pub fn from_include_op(op: char) -> Self {
        if op == '|' {
            MergeMode::Augment
        } else {
            MergeMode::Override
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            MergeMode::Default => "default",
            MergeMode::Augment => "augment",
            MergeMode::Override => "override",
            MergeMode::Replace => "replace",
            MergeMode::AltForm => "alternate",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let mode = match keyword.to_ascii_lowercase().as_str() {
            "default" => MergeMode::Default,
            "augment" => MergeMode::Augment,
            "override" => MergeMode::Override,
            "replace" => MergeMode::Replace,
            "alternate" => MergeMode::AltForm,
            _ => return None,
        };
        Some(mode)
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
