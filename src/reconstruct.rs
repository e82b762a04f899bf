//! Page-text reconstruction: turns one page's ordered positioned-fragment
//! list into a single logical text stream suitable for word counting.
//!
//! PDF content streams frequently split a visual word or line into several
//! show-text runs sharing one baseline and font. Runs that keep both are
//! joined without a separator; a baseline or font change starts a new
//! segment with a single space. A trailing hyphen overrides either change
//! and forces a join, so a word hyphenated across a line break is counted
//! once. The heuristic is decoder- and producer-dependent by nature, which
//! is why it lives here as a pure function over an explicit fragment list,
//! away from any decoder I/O.

use crate::decoder::TextFragment;

/// Join a page's fragments into one string approximating reading order and
/// word boundaries.
///
/// The output receives no trimming or whitespace normalization beyond the
/// separator rule; downstream word counting tolerates irregular spacing.
/// An empty fragment still updates the baseline/font tracking state and may
/// therefore force a separator before the next fragment.
#[must_use]
pub fn reconstruct(fragments: &[TextFragment]) -> String {
    let mut page_text = String::new();
    // 0.0 is a sentinel, not a real baseline: the first fragment is always
    // appended unseparated regardless of its coordinates.
    let mut last_baseline_y = 0.0_f64;
    let mut last_font_id = "";
    let mut first = true;

    for fragment in fragments {
        let same_line = !first
            && fragment.baseline_y == last_baseline_y
            && fragment.font_id == last_font_id;
        let hyphenated = page_text.ends_with('-');

        if !first && !same_line && !hyphenated {
            page_text.push(' ');
        }
        page_text.push_str(&fragment.text);

        last_baseline_y = fragment.baseline_y;
        last_font_id = &fragment.font_id;
        first = false;
    }

    page_text
}

#[cfg(test)]
#[path = "reconstruct_tests.rs"]
mod tests;
