//! Breadcrumb navigation.

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::document::{Breadcrumb, url};
use crate::engine::{Macro, MacroContext, MacroError};
use crate::html;

/// Render a root-first breadcrumb trail as an ordered list.
///
/// Only the final entry carries `class="last"`. An empty trail renders
/// nothing at all, not an empty list.
pub fn render_breadcrumbs(parents: &[Breadcrumb]) -> Result<String, MacroError> {
    if parents.is_empty() {
        return Ok(String::new());
    }

    let mut writer = html::writer();
    html::start(&mut writer, "ol", &[("class", "breadcrumbs")])?;
    for (i, parent) in parents.iter().enumerate() {
        if i + 1 == parents.len() {
            html::start(&mut writer, "li", &[("class", "last")])?;
        } else {
            html::start(&mut writer, "li", &[])?;
        }
        html::write_link(&mut writer, &parent.uri, &parent.title, &[])?;
        html::end(&mut writer, "li")?;
    }
    html::end(&mut writer, "ol")?;

    Ok(html::finish(writer)?)
}

/// `Breadcrumbs` macro: the current document's ancestor chain.
///
/// Ancestors missing from the store are skipped.
pub struct BreadcrumbsMacro;

#[async_trait]
impl Macro for BreadcrumbsMacro {
    fn name(&self) -> &'static str {
        "Breadcrumbs"
    }

    async fn render(&self, ctx: &MacroContext) -> Result<String, MacroError> {
        let Some(current) = ctx.find_by_url(ctx.url()).await? else {
            return Ok(String::new());
        };

        let ancestors = url::ancestor_urls(&current.url);
        let found = try_join_all(ancestors.iter().map(|u| ctx.find_by_url(u))).await?;
        let trail: Vec<Breadcrumb> = found.iter().flatten().map(Breadcrumb::from).collect();

        render_breadcrumbs(&trail)
    }
}
