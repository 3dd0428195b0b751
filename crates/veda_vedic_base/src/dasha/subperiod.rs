//! Proportional sub-period generation.
//!
//! Each child gets `parent_duration × child_years / 120`, starting with the
//! parent's own lord and continuing around the cycle.

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS};

/// The nine antardashas of a mahadasha.
///
/// The last child's end is snapped to the parent's end to absorb
/// floating-point drift.
pub fn antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let n = VIMSHOTTARI_SEQUENCE.len();
    let start = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == parent.lord)
        .unwrap_or(0);
    let parent_duration = parent.duration_days();

    let mut children = Vec::with_capacity(n);
    let mut cursor = parent.start_jd;
    for i in 0..n {
        let (lord, years) = VIMSHOTTARI_SEQUENCE[(start + i) % n];
        let end = cursor + parent_duration * years / VIMSHOTTARI_TOTAL_YEARS;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Antardasha,
            order: (i as u16) + 1,
        });
        cursor = end;
    }
    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
    }
    children
}

/// First period with `start_jd <= jd < end_jd`.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(jd))
}
