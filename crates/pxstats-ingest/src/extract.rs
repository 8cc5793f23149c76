//! Structured field extraction from notice blobs.
//!
//! Name and IV are pulled from the raw blob (labels keep their original
//! casing there); the rarity check needs both blobs because some notice
//! formats only signal shiny with a glyph the normalizer strips.

use once_cell::sync::Lazy;
use pxstats_core::IvTriple;
use regex::Regex;

/// Labeled entity field, e.g. "Pokemon: Necrozma (wild)".
static LABELED_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)pokemon:\s*([A-Za-zÀ-ÿ' .0-9:-]+)").unwrap());

/// Compact dex code: a single letter prefix, 1–4 digits, optional form
/// suffix ("p0721", "p 1012-A"). Leading zeros are dropped by the capture.
static DEX_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bp\s*0*([0-9]{1,4}(?:-[A-Za-z0-9]+)?)\b").unwrap());

/// "IV: a/b/c" with 1–2 digit components; full-width colon tolerated.
static IV_TRIPLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)IV\s*[:：]?\s*(\d{1,2})/(\d{1,2})/(\d{1,2})").unwrap());

/// Rarity glyphs that only appear in the raw, unnormalized text.
const SHINY_GLYPHS: [char; 4] = ['✨', '⭐', '★', '🌟'];

/// Two-tier name extraction: labeled field first, compact dex code as
/// fallback (upstream notices are not uniformly structured). `"?"` when
/// neither matches.
pub fn extract_name(blob: &str) -> String {
    if let Some(cap) = LABELED_NAME.captures(blob) {
        return cap[1].trim().to_string();
    }

    if let Some(cap) = DEX_CODE.captures(blob) {
        return format!("p{}", &cap[1]);
    }

    "?".to_string()
}

/// Extract the IV triple, or `None` if absent — never a partial tuple.
/// No range validation at this layer.
pub fn extract_iv(blob: &str) -> Option<IvTriple> {
    let cap = IV_TRIPLE.captures(blob)?;
    // 1–2 digit captures always fit u8
    Some(IvTriple(
        cap[1].parse().ok()?,
        cap[2].parse().ok()?,
        cap[3].parse().ok()?,
    ))
}

/// Rarity detection: the word "shiny" in the normalized blob, or any
/// rarity glyph in the raw blob.
pub fn extract_shiny(raw: &str, norm: &str) -> bool {
    norm.contains(" shiny") || raw.chars().any(|c| SHINY_GLYPHS.contains(&c))
}
