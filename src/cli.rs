//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render documentation macros and lint the HTML they produce
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; config and relative paths are looked up here
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: docmacro.toml)
    #[arg(short = 'C', long, default_value = "docmacro.toml")]
    pub config: PathBuf,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Where a macro is rendered: the page and the reader's locale
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Url of the page being rendered
    #[arg(short, long)]
    pub url: String,

    /// Requested locale (default: [locale.default])
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render one macro and print the fragment
    Render {
        /// Macro name (case-insensitive)
        name: String,

        #[command(flatten)]
        page: PageArgs,

        /// Macro parameter, repeatable
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Expand every `{{ Macro }}` directive in a file
    Expand {
        /// Source document
        file: PathBuf,

        #[command(flatten)]
        page: PageArgs,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Lint an HTML fragment
    Lint {
        /// HTML file to check
        file: PathBuf,
    },

    /// List the immediate children of a document
    Children {
        /// Parent document url
        url: String,
    },

    /// List registered macros
    Macros,
}

/// Parse `KEY=VALUE`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "docmacro",
            "render",
            "HTTPSidebar",
            "--url",
            "/en-US/docs/Web/HTTP/Overview",
            "-l",
            "es",
            "-p",
            "$0=/en-US/docs/Web",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("docmacro.toml"));
        match cli.command {
            Commands::Render { name, page, params } => {
                assert_eq!(name, "HTTPSidebar");
                assert_eq!(page.locale.as_deref(), Some("es"));
                assert_eq!(params, vec![("$0".to_string(), "/en-US/docs/Web".to_string())]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("title=a=b").unwrap(),
            ("title".to_string(), "a=b".to_string())
        );
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from(["docmacro", "-q", "-C", "site.toml", "macros"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Macros));
    }
}
