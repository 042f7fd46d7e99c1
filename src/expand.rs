//! Expansion of macro directives embedded in source documents.
//!
//! A directive is `{{ Name }}` or `{{ Name(arg, "quoted, arg", 'x') }}`.
//! Arguments become the positional params `$0`, `$1`, ... of the
//! invocation's environment; everything else in the environment is copied
//! from the caller.
//!
//! All directives of a document are independent invocations and render
//! concurrently. Results are spliced back in source order, so the output
//! does not depend on completion order.

use std::ops::Range;
use std::sync::LazyLock;

use futures::future::try_join_all;
use regex::Regex;
use thiserror::Error;

use crate::engine::{Engine, MacroEnvironment, MacroError};

static RE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\{[ \t]*(?P<name>[A-Za-z][A-Za-z0-9_-]*)[ \t]*(?:\((?P<args>(?:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|[^'"()])*)\))?[ \t]*\}\}"#,
    )
    .unwrap()
});

/// Directive expansion errors
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("malformed arguments for `{name}` at offset {offset}: {message}")]
    Syntax {
        name: String,
        offset: usize,
        message: String,
    },

    #[error("macro `{name}` at offset {offset} failed")]
    Macro {
        name: String,
        offset: usize,
        #[source]
        source: MacroError,
    },
}

/// A directive found in a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub args: Vec<String>,
    /// Byte range of the whole `{{ ... }}` in the source
    pub span: Range<usize>,
}

impl Directive {
    /// Environment for this invocation: the caller's, plus positional args.
    pub fn environment(&self, base: &MacroEnvironment) -> MacroEnvironment {
        self.args
            .iter()
            .enumerate()
            .fold(base.clone(), |env, (i, arg)| env.with_param(format!("${i}"), arg.as_str()))
    }
}

/// Find every directive in `source`, in order.
///
/// Directives wrapped in extra braces (`{{{ Name }}}`) are literal text.
pub fn scan(source: &str) -> Result<Vec<Directive>, ExpandError> {
    RE_DIRECTIVE
        .captures_iter(source)
        .filter(|caps| {
            caps.get(0).is_some_and(|m| {
                !source[..m.start()].ends_with('{') && !source[m.end()..].starts_with('}')
            })
        })
        .map(|caps| {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            let name = caps["name"].to_string();
            let args = match caps.name("args") {
                Some(raw) => parse_args(raw.as_str()).map_err(|message| ExpandError::Syntax {
                    name: name.clone(),
                    offset: whole.start,
                    message,
                })?,
                None => Vec::new(),
            };
            Ok(Directive {
                name,
                args,
                span: whole,
            })
        })
        .collect()
}

/// Render every directive in `source` and splice the results in.
pub async fn expand(
    engine: &Engine,
    source: &str,
    env: &MacroEnvironment,
) -> Result<String, ExpandError> {
    let directives = scan(source)?;
    if directives.is_empty() {
        return Ok(source.to_string());
    }

    let rendered = try_join_all(directives.iter().map(|directive| async move {
        engine
            .render(&directive.name, directive.environment(env))
            .await
            .map_err(|source| ExpandError::Macro {
                name: directive.name.clone(),
                offset: directive.span.start,
                source,
            })
    }))
    .await?;

    let mut output = String::with_capacity(source.len() + rendered.iter().map(String::len).sum::<usize>());
    let mut cursor = 0;
    for (directive, html) in directives.iter().zip(&rendered) {
        output.push_str(&source[cursor..directive.span.start]);
        output.push_str(html);
        cursor = directive.span.end;
    }
    output.push_str(&source[cursor..]);
    Ok(output)
}

/// Split a directive argument list into values.
///
/// Quoted values may contain commas and backslash escapes; bare values are
/// taken verbatim with surrounding whitespace trimmed.
fn parse_args(raw: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut rest = raw.trim();
    if rest.is_empty() {
        return Ok(args);
    }

    loop {
        rest = rest.trim_start();
        let (value, after) = match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => read_quoted(&rest[1..], quote)?,
            _ => {
                let end = rest.find(',').unwrap_or(rest.len());
                let value = rest[..end].trim();
                if value.is_empty() {
                    return Err("empty argument".to_string());
                }
                (value.to_string(), &rest[end..])
            }
        };
        args.push(value);

        let after = after.trim_start();
        match after.strip_prefix(',') {
            Some(next) => rest = next,
            None if after.is_empty() => break,
            None => return Err(format!("unexpected `{after}` after argument")),
        }
    }

    Ok(args)
}

/// Read a quoted value; `input` starts just after the opening quote.
fn read_quoted(input: &str, quote: char) -> Result<(String, &str), String> {
    let mut value = String::new();
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            c if c == quote => return Ok((value, &input[i + c.len_utf8()..])),
            c => value.push(c),
        }
    }
    Err(format!("unterminated {quote} string"))
}
