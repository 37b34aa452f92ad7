//! Loop items
//!
//! A loop item is either an image or an inline node, optionally wrapped in
//! a link. Items are immutable configuration; the accessors here derive the
//! labels assistive technology sees.

use serde::{Deserialize, Serialize};

/// Label announced for a link whose item carries no label of its own
pub const FALLBACK_LINK_LABEL: &str = "logo link";

/// An image visual
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// An inline visual node, identified by whatever the host renders it from
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeVisual {
    pub node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

/// What an item shows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemVisual {
    Image(ImageSource),
    Node(NodeVisual),
}

/// One entry in the loop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopItem {
    #[serde(flatten)]
    pub visual: ItemVisual,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LoopItem {
    /// An image item
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            visual: ItemVisual::Image(ImageSource {
                src: src.into(),
                ..Default::default()
            }),
            href: None,
            title: None,
        }
    }

    /// An inline node item
    pub fn node(node: impl Into<String>) -> Self {
        Self {
            visual: ItemVisual::Node(NodeVisual {
                node: node.into(),
                aria_label: None,
            }),
            href: None,
            title: None,
        }
    }

    /// Set alt text (images) or aria label (nodes)
    pub fn label(mut self, label: impl Into<String>) -> Self {
        match &mut self.visual {
            ItemVisual::Image(image) => image.alt = Some(label.into()),
            ItemVisual::Node(node) => node.aria_label = Some(label.into()),
        }
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_image(&self) -> bool {
        matches!(self.visual, ItemVisual::Image(_))
    }

    /// The visual's source string (image URL or node id)
    pub fn source(&self) -> &str {
        match &self.visual {
            ItemVisual::Image(image) => &image.src,
            ItemVisual::Node(node) => &node.node,
        }
    }

    /// Label derived from the item: alt/aria label first, then title
    pub fn accessible_label(&self) -> Option<&str> {
        let own = match &self.visual {
            ItemVisual::Image(image) => image.alt.as_deref(),
            ItemVisual::Node(node) => node.aria_label.as_deref(),
        };
        own.or(self.title.as_deref()).filter(|l| !l.is_empty())
    }

    /// Label on the wrapping link, if the item is linked
    pub fn link_label(&self) -> Option<&str> {
        self.href
            .as_ref()
            .map(|_| self.accessible_label().unwrap_or(FALLBACK_LINK_LABEL))
    }

    /// Whether the visual itself is hidden from assistive technology
    ///
    /// Linked nodes without their own aria label defer to the link.
    pub fn is_visual_hidden(&self) -> bool {
        match &self.visual {
            ItemVisual::Node(node) => self.href.is_some() && node.aria_label.is_none(),
            ItemVisual::Image(_) => false,
        }
    }
}
