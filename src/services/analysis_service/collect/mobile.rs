use crate::error::CollectionError;
use crate::models::{AnalysisTarget, MobileSignals};
use crate::services::analysis_service::extract::html::{self, parse_document};

/// Fonts below this size are hard to read on a phone.
pub const TINY_FONT_PX: f64 = 12.0;

pub fn collect(target: &AnalysisTarget) -> Result<MobileSignals, CollectionError> {
    let doc = parse_document(&target.html)?;
    let font_sizes_px = html::font_sizes_px(&doc);
    let tiny_font_count = font_sizes_px.iter().filter(|px| **px < TINY_FONT_PX).count();

    Ok(MobileSignals {
        has_viewport: html::has_meta(&doc, "viewport"),
        handheld_friendly: html::has_meta(&doc, "HandheldFriendly"),
        touch_optimized: html::count(&doc, "[ontouchstart], [ontouchend]") > 0,
        font_sizes_px,
        tiny_font_count,
    })
}
