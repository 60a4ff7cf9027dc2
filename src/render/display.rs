//! Summary figure display state

use crate::render::escape_html;
use crate::summary::SummaryFigures;

pub const HOLDER_COUNT_SUFFIX: &str = "人";
pub const FLOOR_PRICE_SUFFIX: &str = "ETH";

/// Currently displayed holder count and floor price text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDisplay {
    pub holder_count: String,
    pub floor_price: String,
}

impl Default for SummaryDisplay {
    fn default() -> Self {
        Self {
            holder_count: "---".to_string(),
            floor_price: "---".to_string(),
        }
    }
}

impl SummaryDisplay {
    /// Update from freshly extracted figures. An absent figure keeps the
    /// value already on display.
    pub fn apply(&mut self, figures: &SummaryFigures) {
        if let Some(count) = &figures.member_count {
            self.holder_count = format!("{}{}", count, HOLDER_COUNT_SUFFIX);
        }
        if let Some(price) = &figures.floor_price {
            self.floor_price = format!("{}{}", price, FLOOR_PRICE_SUFFIX);
        }
    }

    /// The summary region, suitable as an `HtmlContainer` anchor
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                "<div class=\"info-block-top\">",
                "<span id=\"holder-count\">{}</span>",
                "<span id=\"floor-price\">{}</span>",
                "</div>"
            ),
            escape_html(&self.holder_count),
            escape_html(&self.floor_price)
        )
    }
}
