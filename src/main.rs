//! docmacro - render documentation macros from the command line.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, PageArgs};
use docmacro::config::DocmacroConfig;
use docmacro::document::{DocumentStore, MemoryStore};
use docmacro::engine::MacroEnvironment;
use docmacro::{expand, log, logger, macros};
use std::{fs, path::Path};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_quiet(cli.quiet);

    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config = DocmacroConfig::load(root, &cli.config)?;

    run(&cli, &config).await
}

async fn run(cli: &Cli, config: &DocmacroConfig) -> Result<()> {
    match &cli.command {
        Commands::Render { name, page, params } => {
            let engine = config.engine()?;
            let env = params
                .iter()
                .fold(environment(config, page), |env, (k, v)| {
                    env.with_param(k.as_str(), v.as_str())
                });

            log!("render"; "{name} for {} ({})", env.url, env.locale);
            let url = env.url.clone();
            let html = engine.render(name, env).await?;
            if html.is_empty() {
                log!("render"; "{name} rendered nothing for {url}");
            }
            check_lint(config, &html)?;
            println!("{html}");
        }
        Commands::Expand { file, page, output } => {
            let source = fs::read_to_string(file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            let engine = config.engine()?;
            let env = environment(config, page);

            log!("expand"; "{} for {} ({})", file.display(), env.url, env.locale);
            let html = expand::expand(&engine, &source, &env).await?;
            check_lint(config, &html)?;
            match output {
                Some(path) => fs::write(path, &html)
                    .with_context(|| format!("failed to write `{}`", path.display()))?,
                None => println!("{html}"),
            }
        }
        Commands::Lint { file } => {
            let html = fs::read_to_string(file)
                .with_context(|| format!("failed to read `{}`", file.display()))?;
            check_lint(config, &html)?;
            log!("lint"; "{}: no issues", file.display());
        }
        Commands::Children { url } => {
            config.validate()?;
            let store = MemoryStore::load_json(&config.store.fixture)?;
            for child in store.find_children(url).await? {
                println!("{}\t{}", child.url, child.title);
            }
        }
        Commands::Macros => {
            for name in macros::builtin_registry().names() {
                println!("{name}");
            }
        }
    }
    Ok(())
}

fn environment(config: &DocmacroConfig, page: &PageArgs) -> MacroEnvironment {
    let locale = page.locale.as_deref().unwrap_or(&config.locale.default);
    MacroEnvironment::new(page.url.as_str(), locale)
}

/// Log every lint issue; under `[lint] strict` any issue is an error.
fn check_lint(config: &DocmacroConfig, html: &str) -> Result<()> {
    let issues = config.lint.validator().lint(html);
    for issue in &issues {
        log!("lint"; "{issue}");
    }
    if config.lint.strict && !issues.is_empty() {
        bail!("{} lint issue(s) in output", issues.len());
    }
    Ok(())
}
