//! `SubpagesWithSummaries` macro.

use async_trait::async_trait;

use crate::engine::{Macro, MacroContext, MacroError};
use crate::html;

/// Lists the children of a page with their summaries.
///
/// The parent is `$0` (or `url`) when given, otherwise the current page.
/// Renders nothing when the parent is absent or childless.
pub struct SubpagesWithSummaries;

#[async_trait]
impl Macro for SubpagesWithSummaries {
    fn name(&self) -> &'static str {
        "SubpagesWithSummaries"
    }

    async fn render(&self, ctx: &MacroContext) -> Result<String, MacroError> {
        let env = ctx.env();
        let parent_url = env
            .positional(0)
            .or_else(|| env.param("url"))
            .filter(|u| !u.is_empty())
            .unwrap_or(env.url.as_str());

        let Some(parent) = ctx.find_by_url(parent_url).await? else {
            return Ok(String::new());
        };
        let children = ctx.find_children(&parent.url).await?;
        if children.is_empty() {
            return Ok(String::new());
        }

        let mut writer = html::writer();
        html::start(&mut writer, "dl", &[("class", "subpages")])?;
        for child in &children {
            html::start(&mut writer, "dt", &[])?;
            html::write_link(&mut writer, &child.url, &child.title, &[])?;
            html::end(&mut writer, "dt")?;
            if !child.summary.is_empty() {
                html::write_text_element(&mut writer, "dd", &child.summary)?;
            }
        }
        html::end(&mut writer, "dl")?;

        Ok(html::finish(writer)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::MacroEnvironment;
    use crate::lint;
    use crate::testing;

    #[tokio::test]
    async fn test_lists_children_of_current_page() {
        let html = testing::engine()
            .render(
                "SubpagesWithSummaries",
                MacroEnvironment::new(testing::OVERVIEW_URL, "en-US"),
            )
            .await
            .unwrap();

        assert!(html.starts_with(r#"<dl class="subpages"><dt><a href="/en-US/docs/Web/HTTP/Overview/Data_URLs">"#));
        assert_eq!(html.matches("<dt>").count(), 2);
        // Summary text is escaped
        assert!(html.contains("<dd>Embed small files inline with the data: scheme &amp; a MIME type.</dd>"));
        assert!(lint::lint(&html).is_empty());
    }

    #[tokio::test]
    async fn test_positional_parent_override() {
        let env = MacroEnvironment::new(testing::OVERVIEW_URL, "en-US")
            .with_param("$0", "/en-us/docs/web/http/headers");
        let html = testing::engine()
            .render("SubpagesWithSummaries", env)
            .await
            .unwrap();

        assert!(html.contains(r#"<a href="/en-US/docs/Web/HTTP/Headers/Accept">Accept</a>"#));
        assert_eq!(html.matches("<dt>").count(), 1);
    }

    #[tokio::test]
    async fn test_childless_or_missing_parent_renders_nothing() {
        let engine = testing::engine();

        let childless = MacroEnvironment::new("/en-US/docs/Web/HTTP/Methods/GET", "en-US");
        assert_eq!(engine.render("SubpagesWithSummaries", childless).await.unwrap(), "");

        let missing = MacroEnvironment::new("/en-US/docs/Nope", "en-US");
        assert_eq!(engine.render("SubpagesWithSummaries", missing).await.unwrap(), "");
    }
}
