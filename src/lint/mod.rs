//! HTML fragment validation.
//!
//! [`lint`] is a pure function of its input: it never changes the fragment
//! and never fails. An empty result means the fragment is clean; whether
//! issues are fatal is the caller's decision.
//!
//! # Example
//!
//! ```
//! use docmacro::lint::{LintRule, lint};
//!
//! let issues = lint("<ol><li><a href=\"/a\">A</a></li></ol>");
//! assert!(issues.is_empty());
//!
//! let issues = lint("<details><p>x</p><summary>late</summary></details>");
//! assert_eq!(issues[0].rule, LintRule::SummaryPlacement);
//! ```

mod rules;

pub use rules::{LintIssue, LintRule};

use quick_xml::{
    Reader,
    events::{BytesEnd, BytesStart, Event},
};
use rustc_hash::FxHashSet;

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Allowed parents of `<li>`.
const LIST_CONTAINERS: &[&str] = &["ol", "ul", "menu"];

/// Lint `html` with every rule enabled.
pub fn lint(html: &str) -> Vec<LintIssue> {
    Validator::new().lint(html)
}

/// A configured rule set.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    disabled: FxHashSet<LintRule>,
}

impl Validator {
    /// Validator with every rule enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_disabled(rules: impl IntoIterator<Item = LintRule>) -> Self {
        Self {
            disabled: rules.into_iter().collect(),
        }
    }

    pub fn is_enabled(&self, rule: LintRule) -> bool {
        !self.disabled.contains(&rule)
    }

    /// Issues found in `html`, ordered by offset.
    pub fn lint(&self, html: &str) -> Vec<LintIssue> {
        let mut reader = Reader::from_str(html);
        reader.config_mut().trim_text(false);
        reader.config_mut().enable_all_checks(false);
        // Element nesting is tracked by the checker alone
        reader.config_mut().allow_unmatched_ends = true;

        let mut checker = Checker::new(self);
        loop {
            let offset = reader.buffer_position() as u64;
            match reader.read_event() {
                Ok(Event::Start(elem)) => checker.open(&elem, offset, false),
                Ok(Event::Empty(elem)) => checker.open(&elem, offset, true),
                Ok(Event::End(elem)) => checker.close(&elem, offset),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    checker.report(LintRule::ParseError, offset, format!("unreadable markup: {err}"));
                    break;
                }
            }
        }

        checker.finish()
    }
}

/// An element still waiting for its closing tag.
struct Frame {
    tag: String,
    offset: u64,
    /// Element children seen so far
    children: usize,
    /// Written as `<tag/>`, which HTML does not treat as closed
    self_closing: bool,
}

/// Single-pass state over one fragment.
struct Checker<'a> {
    validator: &'a Validator,
    stack: Vec<Frame>,
    ids: FxHashSet<String>,
    issues: Vec<LintIssue>,
}

impl<'a> Checker<'a> {
    fn new(validator: &'a Validator) -> Self {
        Self {
            validator,
            stack: Vec::new(),
            ids: FxHashSet::default(),
            issues: Vec::new(),
        }
    }

    fn report(&mut self, rule: LintRule, offset: u64, message: String) {
        if self.validator.is_enabled(rule) {
            self.issues.push(LintIssue {
                rule,
                message,
                offset,
            });
        }
    }

    fn open(&mut self, elem: &BytesStart<'_>, offset: u64, self_closing: bool) {
        let tag = tag_name(elem.name().as_ref());
        let parent = self.stack.last().map(|f| (f.tag.clone(), f.children));

        match tag.as_str() {
            "summary" if !matches!(&parent, Some((p, 0)) if p == "details") => {
                self.report(
                    LintRule::SummaryPlacement,
                    offset,
                    "<summary> must be the first element child of <details>".to_string(),
                );
            }
            "li" if !parent
                .as_ref()
                .is_some_and(|(p, _)| LIST_CONTAINERS.contains(&p.as_str())) =>
            {
                self.report(
                    LintRule::ListItemParent,
                    offset,
                    "<li> must be inside <ol>, <ul> or <menu>".to_string(),
                );
            }
            _ => {}
        }

        self.check_attributes(elem, &tag, offset);

        if let Some(frame) = self.stack.last_mut() {
            frame.children += 1;
        }
        if !VOID_ELEMENTS.contains(&tag.as_str()) {
            self.stack.push(Frame {
                tag,
                offset,
                children: 0,
                self_closing,
            });
        }
    }

    fn check_attributes(&mut self, elem: &BytesStart<'_>, tag: &str, offset: u64) {
        let mut has_href = false;

        for attr in elem.html_attributes() {
            let attr = match attr {
                Ok(attr) => attr,
                Err(err) => {
                    self.report(
                        LintRule::ParseError,
                        offset,
                        format!("malformed attribute on <{tag}>: {err}"),
                    );
                    continue;
                }
            };
            let key = tag_name(attr.key.as_ref());
            let value = String::from_utf8_lossy(attr.value.as_ref());

            match key.as_str() {
                "id" => {
                    if !self.ids.insert(value.to_string()) {
                        self.report(
                            LintRule::DuplicateId,
                            offset,
                            format!("duplicate id `{value}`"),
                        );
                    }
                }
                "style" => {
                    self.report(
                        LintRule::InlineStyle,
                        offset,
                        format!("inline style on <{tag}>"),
                    );
                }
                "href" => has_href = !value.trim().is_empty(),
                _ => {}
            }
        }

        if tag == "a" && !has_href {
            self.report(
                LintRule::EmptyLink,
                offset,
                "<a> without a non-empty href".to_string(),
            );
        }
    }

    fn close(&mut self, elem: &BytesEnd<'_>, offset: u64) {
        let tag = tag_name(elem.name().as_ref());
        if VOID_ELEMENTS.contains(&tag.as_str()) {
            return;
        }

        match self.stack.iter().rposition(|f| f.tag == tag) {
            Some(index) => {
                let unclosed = self.stack.split_off(index + 1);
                self.stack.truncate(index);
                for frame in unclosed.into_iter().rev() {
                    self.report_unclosed(frame);
                }
            }
            None => self.report(
                LintRule::StrayEndTag,
                offset,
                format!("</{tag}> has no matching open element"),
            ),
        }
    }

    fn report_unclosed(&mut self, frame: Frame) {
        let message = if frame.self_closing {
            format!("<{}/> does not close a non-void element", frame.tag)
        } else {
            format!("<{}> is never closed", frame.tag)
        };
        self.report(LintRule::UnclosedElement, frame.offset, message);
    }

    fn finish(mut self) -> Vec<LintIssue> {
        let remaining = std::mem::take(&mut self.stack);
        for frame in remaining {
            self.report_unclosed(frame);
        }
        self.issues.sort_by_key(|issue| issue.offset);
        self.issues
    }
}

/// Lowercased element or attribute name.
fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(html: &str) -> Vec<LintRule> {
        lint(html).into_iter().map(|issue| issue.rule).collect()
    }

    #[test]
    fn test_clean_fragment() {
        let html = r#"<section id="Quick_links"><ol><li class="toggle"><details open=""><summary>S</summary><ol><li><a href="/a">A</a></li></ol></details></li></ol></section>"#;
        assert!(lint(html).is_empty());
    }

    #[test]
    fn test_empty_fragment_is_clean() {
        assert!(lint("").is_empty());
    }

    #[test]
    fn test_void_elements_and_boolean_attributes() {
        assert!(lint("<p>a<br>b<img src=\"x.png\" alt=\"\"><br/></p>").is_empty());
        assert!(lint("<details open><summary>S</summary></details>").is_empty());
    }

    #[test]
    fn test_unclosed_element() {
        let issues = lint("<ol><li><a href=\"/a\">A</a></ol>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, LintRule::UnclosedElement);
        assert_eq!(issues[0].offset, 4);
    }

    #[test]
    fn test_unclosed_at_end() {
        assert_eq!(rules("<div><p>text"), vec![LintRule::UnclosedElement, LintRule::UnclosedElement]);
    }

    #[test]
    fn test_stray_end_tag() {
        assert_eq!(rules("<p>x</p></div>"), vec![LintRule::StrayEndTag]);
    }

    #[test]
    fn test_stray_end_tag_keeps_scanning() {
        let issues = lint(r#"<p>x</p></div><a>y</a><p style="c">z</p>"#);
        let rules: Vec<_> = issues.iter().map(|i| i.rule).collect();
        assert_eq!(
            rules,
            vec![LintRule::StrayEndTag, LintRule::EmptyLink, LintRule::InlineStyle]
        );
        assert_eq!(issues[0].offset, 8);
    }

    #[test]
    fn test_stray_end_tag_inside_element() {
        assert_eq!(rules("<div></span></div>"), vec![LintRule::StrayEndTag]);
        assert_eq!(rules("<ol><li>a</li></li></ol>"), vec![LintRule::StrayEndTag]);
    }

    #[test]
    fn test_self_closing_non_void_stays_open() {
        let issues = lint("<div/><p>x</p>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, LintRule::UnclosedElement);
        assert!(issues[0].message.contains("<div/>"));

        // The browser nests following content, so a later close is fine
        assert!(lint("<div/><p>x</p></div>").is_empty());
        assert!(lint("<p>a<br/>b</p>").is_empty());
    }

    #[test]
    fn test_summary_placement() {
        assert_eq!(
            rules("<details><p>x</p><summary>late</summary></details>"),
            vec![LintRule::SummaryPlacement]
        );
        assert_eq!(rules("<div><summary>x</summary></div>"), vec![LintRule::SummaryPlacement]);
        assert_eq!(rules("<summary>x</summary>"), vec![LintRule::SummaryPlacement]);
    }

    #[test]
    fn test_list_item_parent() {
        assert_eq!(rules("<div><li>x</li></div>"), vec![LintRule::ListItemParent]);
        assert!(rules("<ul><li>x</li></ul><menu><li>y</li></menu>").is_empty());
    }

    #[test]
    fn test_empty_link() {
        assert_eq!(rules("<a>x</a>"), vec![LintRule::EmptyLink]);
        assert_eq!(rules("<a href=\" \">x</a>"), vec![LintRule::EmptyLink]);
        assert!(rules("<a href=\"/x\">x</a>").is_empty());
    }

    #[test]
    fn test_duplicate_id() {
        let issues = lint(r#"<p id="a">1</p><p id="a">2</p>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, LintRule::DuplicateId);
        assert!(issues[0].message.contains("`a`"));
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(rules(r#"<p style="color: red">x</p>"#), vec![LintRule::InlineStyle]);
    }

    #[test]
    fn test_tag_names_case_insensitive() {
        assert!(lint("<OL><LI><A HREF=\"/a\">A</A></LI></OL>").is_empty());
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let validator = Validator::with_disabled([LintRule::InlineStyle, LintRule::EmptyLink]);
        assert!(validator.lint(r#"<p style="x"><a>y</a></p>"#).is_empty());
        assert!(!validator.is_enabled(LintRule::InlineStyle));
        assert!(validator.is_enabled(LintRule::DuplicateId));
    }

    #[test]
    fn test_issues_ordered_by_offset() {
        let issues = lint(r#"<div><a>x</a><p style="y">z</p>"#);
        let offsets: Vec<_> = issues.iter().map(|i| i.offset).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        assert_eq!(offsets, sorted);
        assert_eq!(issues[0].rule, LintRule::UnclosedElement);
    }

    #[test]
    fn test_lint_does_not_mutate() {
        let html = String::from("<p>x");
        let _ = lint(&html);
        assert_eq!(html, "<p>x");
    }
}
