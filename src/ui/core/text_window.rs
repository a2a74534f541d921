//! Column-width helpers for fitting text into fixed-width cells.
//!
//! Widths are terminal columns, indices are byte offsets that always land on
//! UTF-8 character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of `s` in terminal columns, saturated to `u16`.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// The longest prefix of `s` that fits into `max_width` columns.
pub fn clip_to_width(s: &str, max_width: u16) -> &str {
    &s[..truncate_to_width(s, usize::from(max_width))]
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text_window.rs"]
mod tests;
