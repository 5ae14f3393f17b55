//! Window arithmetic shared by the row and column axes.
//!
//! A run of `len` cells starting at `pos` on a line of `extent` cells claims a
//! window of start positions around itself; exactly one start indicator (of
//! any length) may be active inside that window. A cell is likewise covered by
//! a bounded set of (length, start) combinations. Both computations are pure
//! and axis-agnostic.

/// Inclusive range of start positions claimed by a run of `len` cells at
/// `pos`. Four cases depending on which edges the run touches:
/// full-span, flush left, flush right, or interior (one free cell on each
/// side belongs to the window).
pub fn border_window(pos: usize, len: usize, extent: usize) -> (usize, usize) {
    debug_assert!(len >= 1 && pos + len <= extent);
    if len == extent {
        (pos, extent - 1)
    } else if pos == 0 {
        (0, len)
    } else if pos + len == extent {
        (pos, extent - 1)
    } else {
        (pos - 1, pos + len)
    }
}

/// All (length, start) combinations whose run would cover the cell at `pos`
/// on a line of `extent` cells. Lengths run through the full 0..=extent
/// range; callers force the impossible ones to zero elsewhere.
pub fn coverage_pairs(pos: usize, extent: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for len in 0..=extent {
        for j in 0..len.min(pos + 1) {
            pairs.push((len, pos - j));
        }
    }
    pairs
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_border_window_full_span() {
        assert_eq!(border_window(0, 8, 8), (0, 7));
        assert_eq!(border_window(0, 1, 1), (0, 0));
    }

    #[test]
    fn test_border_window_left_edge() {
        assert_eq!(border_window(0, 3, 8), (0, 3));
    }

    #[test]
    fn test_border_window_right_edge() {
        assert_eq!(border_window(5, 3, 8), (5, 7));
    }

    #[test]
    fn test_border_window_interior() {
        assert_eq!(border_window(2, 3, 8), (1, 5));
    }

    #[test]
    fn test_coverage_pairs_small() {
        // Cell 1 on a 3-cell line: runs of length 2 starting at 0 or 1, and
        // the full-length run starting at 0 or 1.
        let pairs = coverage_pairs(1, 3);
        assert_eq!(pairs, vec![(1, 1), (2, 1), (2, 0), (3, 1), (3, 0)]);
    }

    // Ground truth for one line under a black-square mask: the maximal
    // non-black runs, as (start, len).
    fn runs(mask: u32, extent: usize) -> Vec<(usize, usize)> {
        let black = |p: usize| mask & (1 << p) != 0;
        let mut out = Vec::new();
        let mut p = 0;
        while p < extent {
            if black(p) {
                p += 1;
                continue;
            }
            let start = p;
            while p < extent && !black(p) {
                p += 1;
            }
            out.push((start, p - start));
        }
        out
    }

    // Every black/letter layout of a line induces a unique set of active
    // start indicators (the maximal runs of at least two cells). Each such
    // run must see exactly one active start inside its border window, and
    // each of its cells exactly one covering (length, start) pair; cells
    // that are black or in single-cell runs must see none.
    #[test]
    fn test_windows_against_exhaustive_line_layouts() {
        for extent in 4..=10usize {
            for mask in 0..(1u32 << extent) {
                let all = runs(mask, extent);
                let active: Vec<(usize, usize)> =
                    all.iter().copied().filter(|&(_, len)| len >= 2).collect();
                for &(start, len) in &active {
                    let (w_lo, w_hi) = border_window(start, len, extent);
                    let inside = active
                        .iter()
                        .filter(|&&(s, _)| w_lo <= s && s <= w_hi)
                        .count();
                    assert_eq!(
                        inside, 1,
                        "extent {} mask {:b} run ({}, {})",
                        extent, mask, start, len
                    );
                }
                for pos in 0..extent {
                    let covered = coverage_pairs(pos, extent)
                        .into_iter()
                        .filter(|&(len, s)| active.contains(&(s, len)))
                        .count();
                    let in_active_run = active
                        .iter()
                        .any(|&(s, len)| s <= pos && pos < s + len);
                    let want = if in_active_run { 1 } else { 0 };
                    assert_eq!(
                        covered, want,
                        "extent {} mask {:b} pos {}",
                        extent, mask, pos
                    );
                }
            }
        }
    }
}
