//! Scoring module - line clear, combo and back-to-back rules
//!
//! - Base points per clear come from [`LINE_SCORES`] (100/300/500/800); there is no level
//!   multiplier.
//! - Back-to-back applies a 3/2 multiplier to the base points of a 4-line clear that follows
//!   another 4-line clear. Rounding is half-up; with the current table the product is always exact.
//! - Combo bonus is `COMBO_BASE * combo_index`, added after the base points.

use crate::types::{
    B2B_DENOMINATOR, B2B_NUMERATOR, COMBO_BASE, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES,
    SOFT_DROP_POINTS,
};

/// Combo value meaning "no active combo chain"
pub const NO_COMBO: i32 = -1;

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Base points for the clear (includes B2B multiplier, excludes combo bonus).
    pub line_clear_score: u32,
    /// Combo bonus added on top of `line_clear_score`.
    pub combo_bonus: u32,
    pub total: u32,
    pub qualifies_for_b2b: bool,
    /// Whether a B2B multiplier was applied to this clear.
    pub b2b_applied: bool,
}

/// Base points for clearing `lines` rows at once; 0 outside 1..=4
pub fn calculate_line_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Next combo index after a lock that cleared `lines` rows.
///
/// - `-1`: no combo chain
/// - `0`: first clear in a chain (no bonus)
/// - `1+`: consecutive clears
pub fn next_combo(combo: i32, lines: usize) -> i32 {
    if lines == 0 {
        NO_COMBO
    } else if combo < 0 {
        0
    } else {
        combo.saturating_add(1)
    }
}

/// Calculate combo bonus (`COMBO_BASE * combo_index`, nothing for the first clear of a chain)
pub fn calculate_combo_bonus(combo_index: i32) -> u32 {
    if combo_index <= 0 {
        return 0;
    }
    COMBO_BASE.saturating_mul(combo_index as u32)
}

/// Only 4-line clears qualify for back-to-back
pub fn qualifies_for_b2b(lines: usize) -> bool {
    lines == 4
}

/// Apply the B2B multiplier (3/2) to a point value, rounding half up.
pub fn apply_b2b_multiplier(points: u32) -> u32 {
    let scaled = u64::from(points) * u64::from(B2B_NUMERATOR);
    let denominator = u64::from(B2B_DENOMINATOR);
    let rounded = (scaled + denominator / 2) / denominator;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Calculate the score for a lock that cleared `lines` rows.
///
/// `combo_index` is the combo value *after* this clear (see [`next_combo`]) and `previous_b2b`
/// the back-to-back flag *before* it.
pub fn calculate_score(lines: usize, combo_index: i32, previous_b2b: bool) -> ScoreResult {
    if lines == 0 {
        return ScoreResult::default();
    }

    let qualifies_b2b = qualifies_for_b2b(lines);
    let base_points = calculate_line_score(lines);

    let b2b_applied = qualifies_b2b && previous_b2b;
    let line_clear_score = if b2b_applied {
        apply_b2b_multiplier(base_points)
    } else {
        base_points
    };

    let combo_bonus = calculate_combo_bonus(combo_index);
    let total = line_clear_score.saturating_add(combo_bonus);

    ScoreResult {
        line_clear_score,
        combo_bonus,
        total,
        qualifies_for_b2b: qualifies_b2b,
        b2b_applied,
    }
}

/// Calculate drop score
/// soft drop: +1 per cell
/// hard drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    let per_cell = if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    cells.saturating_mul(per_cell)
}

/// Level for a running line total: starts at 1, +1 every 10 lines
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}
