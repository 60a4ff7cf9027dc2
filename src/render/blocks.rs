//! Rank block HTML

use crate::rank::{RankingBoard, TierBucket};
use crate::render::RenderTarget;
use std::fmt::Write;

/// Shown in place of the member list when a tier has no members
pub const EMPTY_TIER_TEXT: &str = "該当者なし";

/// Default directory the tier images are served from
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render one tier as a rank block
pub fn render_rank_block(bucket: &TierBucket, image_dir: &str) -> String {
    let def = &bucket.definition;
    let name = escape_html(&def.name);

    let list_content = if bucket.is_empty() {
        EMPTY_TIER_TEXT.to_string()
    } else {
        bucket.members.iter().fold(String::new(), |mut acc, member| {
            let _ = write!(
                acc,
                "<li>{} ({}点)</li>",
                escape_html(&member.display_name),
                member.score
            );
            acc
        })
    };

    let image_src = if image_dir.is_empty() {
        def.image_ref.clone()
    } else {
        format!("{}/{}", image_dir.trim_end_matches('/'), def.image_ref)
    };

    format!(
        concat!(
            "<div class=\"rank-block\">",
            "<div class=\"rank-header bg-{name}\">",
            "<h2>{name}</h2>",
            "<div class=\"rank-range\">{range}</div>",
            "</div>",
            "<div class=\"rank-content\">",
            "<img src=\"{src}\" alt=\"{name}の画像\" class=\"rank-image {name}\">",
            "<p class=\"rank-description\">{desc}</p>",
            "<ul class=\"user-list\">{list}</ul>",
            "</div>",
            "</div>"
        ),
        name = name,
        range = escape_html(&def.range_label()),
        src = escape_html(&image_src),
        desc = escape_html(&def.description),
        list = list_content,
    )
}

/// Replace the target's rank blocks with one block per tier, in tier order
pub fn render_board<T: RenderTarget>(board: &RankingBoard, target: &mut T, image_dir: &str) {
    let blocks = board
        .buckets()
        .iter()
        .map(|bucket| render_rank_block(bucket, image_dir))
        .collect();
    target.replace_rank_blocks(blocks);
}
