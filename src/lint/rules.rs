//! Lint rules and issues.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Checks applied to rendered fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintRule {
    /// Markup the tokenizer cannot read; scanning stops here
    ParseError,
    /// Element opened but never closed
    UnclosedElement,
    /// Closing tag without a matching open element
    StrayEndTag,
    /// `<summary>` that is not the first element child of `<details>`
    SummaryPlacement,
    /// `<li>` outside `<ol>`, `<ul>` or `<menu>`
    ListItemParent,
    /// `<a>` without a non-empty `href`
    EmptyLink,
    /// The same `id` used twice
    DuplicateId,
    /// `style` attribute
    InlineStyle,
}

impl LintRule {
    pub const ALL: [LintRule; 8] = [
        Self::ParseError,
        Self::UnclosedElement,
        Self::StrayEndTag,
        Self::SummaryPlacement,
        Self::ListItemParent,
        Self::EmptyLink,
        Self::DuplicateId,
        Self::InlineStyle,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseError => "parse-error",
            Self::UnclosedElement => "unclosed-element",
            Self::StrayEndTag => "stray-end-tag",
            Self::SummaryPlacement => "summary-placement",
            Self::ListItemParent => "list-item-parent",
            Self::EmptyLink => "empty-link",
            Self::DuplicateId => "duplicate-id",
            Self::InlineStyle => "inline-style",
        }
    }
}

impl fmt::Display for LintRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found in a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintIssue {
    pub rule: LintRule,
    pub message: String,
    /// Byte offset of the offending markup
    pub offset: u64,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.offset, self.rule, self.message)
    }
}
