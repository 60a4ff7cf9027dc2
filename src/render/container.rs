//! Render targets
//!
//! The ranking pipeline owns the rank blocks of its container. A sibling
//! anchor (the summary region) must survive every re-render in place.

/// A container the ranking pipeline can render into
pub trait RenderTarget {
    /// Drop every existing rank block and install `blocks`, keeping the
    /// designated anchor node where it is
    fn replace_rank_blocks(&mut self, blocks: Vec<String>);
}

/// In-memory HTML container: an optional anchor followed by rank blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContainer {
    anchor: Option<String>,
    blocks: Vec<String>,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Container whose first child is a preserved anchor
    pub fn with_anchor(anchor: impl Into<String>) -> Self {
        Self {
            anchor: Some(anchor.into()),
            blocks: Vec::new(),
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn set_anchor(&mut self, anchor: impl Into<String>) {
        self.anchor = Some(anchor.into());
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(anchor) = &self.anchor {
            html.push_str(anchor);
        }
        for block in &self.blocks {
            html.push_str(block);
        }
        html
    }
}

impl RenderTarget for HtmlContainer {
    fn replace_rank_blocks(&mut self, blocks: Vec<String>) {
        self.blocks = blocks;
    }
}
