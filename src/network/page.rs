//! Summary of a successfully fetched document

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use url::Url;

/// What the host shows for a loaded page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    url: Url,
    status: u16,
    title: String,
    content_length: usize,
}

impl Page {
    /// Build a page summary from a response body
    pub fn from_html(url: Url, status: u16, html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let mut title = String::new();
        find_title(&dom.document, &mut title);
        if title.is_empty() {
            title = "Untitled".to_string();
        }

        Self {
            url,
            status,
            title,
            content_length: html.len(),
        }
    }

    /// Final URL after redirects
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body size in bytes
    pub fn content_length(&self) -> usize {
        self.content_length
    }
}

fn find_title(handle: &Handle, title: &mut String) -> bool {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == "title" {
            for child in handle.children.borrow().iter() {
                if let NodeData::Text { contents } = &child.data {
                    title.push_str(&contents.borrow());
                }
            }
            *title = title.split_whitespace().collect::<Vec<_>>().join(" ");
            return true;
        }
    }

    handle
        .children
        .borrow()
        .iter()
        .any(|child| find_title(child, title))
}
