//! Section sidebars built from the document graph.
//!
//! Output shape (one `<li class="toggle">` per section, in declaration order):
//!
//! ```html
//! <section id="Quick_links" class="sidebar">
//!   <ol>
//!     <li class="section"><a href="/en-US/docs/Web/HTTP">HTTP</a></li>
//!     <li class="toggle">
//!       <details open="">
//!         <summary>Resources and URIs</summary>
//!         <ol><li><a href="...">...</a></li></ol>
//!       </details>
//!     </li>
//!   </ol>
//! </section>
//! ```
//!
//! Whitespace above is for reading only; the real output has none.

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::document::{DocumentSummary, url};
use crate::engine::{Macro, MacroContext, MacroError};
use crate::html::{self, HtmlWriter};

/// Where the entries of a sidebar section come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSource {
    /// Children of the document the macro is rendered into.
    CurrentPage,
    /// Children of the document at this slug, in the requested locale.
    Slug(&'static str),
}

/// One collapsible section: a localized heading plus its child links.
#[derive(Debug, Clone, Copy)]
pub struct SidebarSection {
    /// Locale key of the `<summary>` text
    pub heading: &'static str,
    pub source: SectionSource,
}

/// A sidebar macro definition.
#[derive(Debug, Clone, Copy)]
pub struct Sidebar {
    pub name: &'static str,
    /// Slug of the area's landing page, linked above the sections
    pub root_slug: &'static str,
    pub sections: &'static [SidebarSection],
}

/// Navigation for the HTTP documentation area.
pub const HTTP_SIDEBAR: Sidebar = Sidebar {
    name: "HTTPSidebar",
    root_slug: "Web/HTTP",
    sections: &[
        SidebarSection {
            heading: "ResourcesURI",
            source: SectionSource::CurrentPage,
        },
        SidebarSection {
            heading: "Headers",
            source: SectionSource::Slug("Web/HTTP/Headers"),
        },
        SidebarSection {
            heading: "Methods",
            source: SectionSource::Slug("Web/HTTP/Methods"),
        },
        SidebarSection {
            heading: "StatusCodes",
            source: SectionSource::Slug("Web/HTTP/Status"),
        },
    ],
};

/// Section data gathered before any markup is written.
struct ResolvedSection<'a> {
    heading: &'a str,
    source_url: String,
    children: Vec<DocumentSummary>,
}

impl Sidebar {
    fn section_url(&self, section: &SidebarSection, current: &DocumentSummary, locale: &str) -> String {
        match section.source {
            SectionSource::CurrentPage => current.url.clone(),
            SectionSource::Slug(slug) => url::docs_url(locale, slug),
        }
    }

    fn write(
        &self,
        writer: &mut HtmlWriter,
        current: &DocumentSummary,
        root: Option<&DocumentSummary>,
        sections: &[ResolvedSection<'_>],
    ) -> std::io::Result<()> {
        html::start(writer, "section", &[("id", "Quick_links"), ("class", "sidebar")])?;
        html::start(writer, "ol", &[])?;

        if let Some(root) = root {
            html::start(writer, "li", &[("class", "section")])?;
            html::write_link(writer, &root.url, &root.title, &[])?;
            html::end(writer, "li")?;
        }

        let current_key = current.key();
        for section in sections {
            html::start(writer, "li", &[("class", "toggle")])?;
            if is_open(section, &current_key) {
                html::start(writer, "details", &[("open", "")])?;
            } else {
                html::start(writer, "details", &[])?;
            }
            html::write_text_element(writer, "summary", section.heading)?;

            html::start(writer, "ol", &[])?;
            for child in &section.children {
                html::start(writer, "li", &[])?;
                if child.key() == current_key {
                    html::write_link(writer, &child.url, &child.title, &[("aria-current", "page")])?;
                } else {
                    html::write_link(writer, &child.url, &child.title, &[])?;
                }
                html::end(writer, "li")?;
            }
            html::end(writer, "ol")?;

            html::end(writer, "details")?;
            html::end(writer, "li")?;
        }

        html::end(writer, "ol")?;
        html::end(writer, "section")
    }
}

/// A section starts expanded when the current page is its source or lives
/// underneath it.
fn is_open(section: &ResolvedSection<'_>, current_key: &str) -> bool {
    let source_key = url::key(&section.source_url);
    source_key == current_key
        || current_key
            .strip_prefix(source_key.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

#[async_trait]
impl Macro for Sidebar {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn render(&self, ctx: &MacroContext) -> Result<String, MacroError> {
        // Children are only meaningful once the current page is known to exist.
        let Some(current) = ctx.find_by_url(ctx.url()).await? else {
            return Ok(String::new());
        };

        let headings = self
            .sections
            .iter()
            .map(|section| ctx.localize(section.heading))
            .collect::<Result<Vec<_>, _>>()?;

        let source_urls: Vec<String> = self
            .sections
            .iter()
            .map(|section| self.section_url(section, &current, ctx.locale()))
            .collect();
        let root_url = url::docs_url(ctx.locale(), self.root_slug);

        // Independent lookups; `try_join_all` keeps results in input order.
        let (root, children) = futures::try_join!(
            ctx.find_by_url(&root_url),
            try_join_all(source_urls.iter().map(|u| ctx.find_children(u))),
        )?;

        let sections: Vec<ResolvedSection<'_>> = headings
            .into_iter()
            .zip(source_urls)
            .zip(children)
            .map(|((heading, source_url), children)| ResolvedSection {
                heading,
                source_url,
                children,
            })
            .collect();

        let mut writer = html::writer();
        self.write(&mut writer, &current, root.as_ref(), &sections)?;
        Ok(html::finish(writer)?)
    }
}
