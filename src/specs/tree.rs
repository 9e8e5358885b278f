// src/specs/tree.rs
//! Spec for a taxon's classification page (`/node/view/{id}/tree`).
//!
//! Ground truth:
//! - `.bgpage-roots a`: the breadcrumb of the classification, root first.
//!   Each anchor carries the label as text, the node link in `href` and the
//!   rank in `title`. The page's own taxon is normally the last entry.
//!   Other links (guide, images) can appear in the same block.
//! - `.node-title`: the page heading. `h1` holds the display label and `i`
//!   the italicized scientific name; the common name follows the last ` - `.
//!
//! This spec only reads the page. Which anchors count as lineage entries and
//! how their labels split into names is decided in `taxon::lineage`.

use crate::config::consts::{NODE_TITLE, NODE_TITLE_HEADING, NODE_TITLE_ITALIC, ROOTS_LINKS};
use crate::core::html::Document;
use crate::core::sanitize::{non_blank, normalize_ws};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootLink {
    pub href: String,
    pub text: String,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreePage {
    pub heading: Option<String>,
    pub italic: Option<String>,
    pub title_text: Option<String>,
    pub roots: Vec<RootLink>,
}

impl TreePage {
    pub fn parse(body: &str) -> Result<Self> {
        let doc = Document::parse(body);

        let roots = doc
            .select(ROOTS_LINKS)?
            .into_iter()
            .filter_map(|a| {
                let href = a.attr("href")?;
                Some(RootLink {
                    href: href.trim().to_string(),
                    text: a.text(),
                    title: a.attr("title").and_then(non_blank),
                })
            })
            .collect();

        Ok(Self {
            heading: non_blank(&normalize_ws(&doc.text_of(NODE_TITLE_HEADING)?)),
            italic: non_blank(&normalize_ws(&doc.text_of(NODE_TITLE_ITALIC)?)),
            title_text: non_blank(&normalize_ws(&doc.text_of(NODE_TITLE)?)),
            roots,
        })
    }

    /// Common name shown in the heading after the last ` - `, if any.
    /// Hyphens inside the common name itself do not split.
    pub fn heading_common_name(&self) -> Option<String> {
        let text = self.title_text.as_deref()?;
        let (_, tail) = text.rsplit_once(" - ")?;
        non_blank(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="node-title"><h1>Species <i>Apis mellifera</i> - Western Honey Bee</h1></div>
          <div class="bgpage-roots">
            <a href="/node/view/3/tree" title="Kingdom">Animals&nbsp;(Animalia)</a> &raquo;
            <a href="/node/view/52/tree" title="Order">Ants, Bees, Wasps and Sawflies (Hymenoptera)</a> &raquo;
            <a name="anchor-only">no href</a>
            <a href="/node/view/3080/tree" title="Species">Western Honey Bee (Apis mellifera)</a>
          </div>
        </body></html>
    "#;

    #[test]
    fn reads_roots_in_order() {
        let page = TreePage::parse(PAGE).unwrap();
        assert_eq!(page.roots.len(), 3);
        assert_eq!(page.roots[0].href, "/node/view/3/tree");
        assert_eq!(page.roots[0].text, "Animals (Animalia)");
        assert_eq!(page.roots[0].title.as_deref(), Some("Kingdom"));
        assert_eq!(page.roots[2].title.as_deref(), Some("Species"));
    }

    #[test]
    fn reads_heading_parts() {
        let page = TreePage::parse(PAGE).unwrap();
        assert_eq!(page.heading.as_deref(), Some("Species Apis mellifera - Western Honey Bee"));
        assert_eq!(page.italic.as_deref(), Some("Apis mellifera"));
        assert_eq!(page.heading_common_name().as_deref(), Some("Western Honey Bee"));
    }

    #[test]
    fn hyphenated_common_name_stays_whole() {
        let page = TreePage::parse(
            r#"<div class="node-title"><h1>Genus <i>Trichocnemis</i> - Big-headed Borers</h1></div>"#,
        )
        .unwrap();
        assert_eq!(page.heading_common_name().as_deref(), Some("Big-headed Borers"));

        let bare = TreePage::parse(
            r#"<div class="node-title"><h1>Genus <i>Trichocnemis</i></h1></div>"#,
        )
        .unwrap();
        assert_eq!(bare.heading_common_name(), None);
    }

    #[test]
    fn missing_blocks_give_empty_page() {
        let page = TreePage::parse("<html><body><p>gone</p></body></html>").unwrap();
        assert_eq!(page, TreePage::default());
        assert_eq!(page.heading_common_name(), None);
    }
}
