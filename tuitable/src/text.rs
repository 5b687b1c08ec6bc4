use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::table::Alignment;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Keep one column for the ellipsis that marks the cut.
    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

pub fn align_offset(text_width: usize, available_width: usize, align: Alignment) -> usize {
    let spare = available_width.saturating_sub(text_width);
    match align {
        Alignment::Left => 0,
        Alignment::Center => spare / 2,
        Alignment::Right => spare,
    }
}
