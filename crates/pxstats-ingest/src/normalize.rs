//! Text normalization — one case/accent-insensitive blob per notice.

use pxstats_core::Notice;
use unicode_normalization::UnicodeNormalization;

/// The two textual views of a notice. `norm` is for phrase matching;
/// `raw` keeps the glyphs normalization would destroy (rarity markers).
#[derive(Debug, Clone)]
pub struct NoticeText {
    pub norm: String,
    pub raw: String,
}

/// Concatenate all textual surfaces of a notice and normalize.
/// Missing surfaces become empty strings; this never fails.
pub fn normalize_notice(notice: &Notice) -> NoticeText {
    let mut raw = String::new();
    raw.push_str(&notice.title);
    raw.push('\n');
    raw.push_str(&notice.description);
    for field in &notice.fields {
        raw.push('\n');
        raw.push_str(&field.label);
        raw.push('\n');
        raw.push_str(&field.value);
    }

    let norm = normalize(&raw);
    NoticeText { norm, raw }
}

/// NFKD-decompose, drop everything non-ASCII (combining marks, emoji),
/// casefold, trim. Matches accent-insensitive substring search.
pub fn normalize(s: &str) -> String {
    s.nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_lowercase()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diacritics_stripped() {
        assert_eq!(normalize("Flabébé"), "flabebe");
        assert_eq!(normalize("POKÉMON Caught"), "pokemon caught");
    }

    #[test]
    fn test_glyphs_survive_only_in_raw() {
        let notice = Notice::new("Encounter Ping", "✨ Flabébé appeared");
        let text = normalize_notice(&notice);
        assert!(text.raw.contains('✨'));
        assert!(!text.norm.contains('✨'));
        assert!(text.norm.contains("flabebe appeared"));
    }

    #[test]
    fn test_fields_joined_with_newlines() {
        let notice = Notice::new("Title", "Desc").with_field("Pokemon", "Necrozma");
        let text = normalize_notice(&notice);
        assert_eq!(text.raw, "Title\nDesc\nPokemon\nNecrozma");
    }

    #[test]
    fn test_empty_notice() {
        let text = normalize_notice(&Notice::default());
        assert_eq!(text.norm, "");
    }
}
