//! Hygiene classification of a node.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The hygiene category assigned to a node, or `Valid`.
///
/// The string form is the label written to the report.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Classification {
    /// No rule matched.
    #[default]
    #[strum(serialize = "VALID")]
    Valid,
    /// Name begins or ends with a dot.
    #[strum(serialize = "DOT")]
    DotName,
    /// Directory without any retained children.
    #[strum(serialize = "EMPTY_DIR")]
    EmptyDirectory,
    /// Zero-byte regular file.
    #[strum(serialize = "EMPTY_FILE")]
    EmptyFile,
    /// Name contains characters outside the allow-list.
    #[strum(serialize = "SYMBOLS")]
    InvalidCharacters,
}

impl Classification {
    /// Report label for this classification.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Check if this classification is `Valid`.
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// Check if this classification is a violation.
    pub fn is_violation(self) -> bool {
        !self.is_valid()
    }
}
