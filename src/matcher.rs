//! Approximate matching by Levenshtein distance.

/// Maximum edit distance used when the caller does not provide one.
pub const DEFAULT_MAX_DIST: usize = 3;

/// Best-scoring window found by [`closest_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestMatch {
    pub offset: usize,
    pub distance: usize,
}

/// Levenshtein distance: minimum number of single-element insertions, deletions
/// and substitutions turning `a` into `b`.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // two rows of the DP table
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(x != y);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Scan every window of `seq` with the length of `reference` and return the one with
/// the smallest edit distance. Ties go to the lowest offset. `None` when the reference
/// is longer than `seq`.
pub fn closest_window<T: PartialEq>(seq: &[T], reference: &[T]) -> Option<ClosestMatch> {
    if reference.len() > seq.len() {
        return None;
    }

    let mut best: Option<ClosestMatch> = None;
    for offset in 0..=seq.len() - reference.len() {
        let window = &seq[offset..offset + reference.len()];
        let distance = edit_distance(window, reference);
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(ClosestMatch { offset, distance });
            if distance == 0 {
                break;
            }
        }
    }
    best
}

/// Offset of the closest window of `seq` to `reference`, if its distance is at most
/// `max_dist`.
pub fn find_closest_match<T: PartialEq>(seq: &[T], reference: &[T], max_dist: usize) -> Option<usize> {
    closest_match_within(seq, reference, max_dist).map(|m| m.offset)
}

/// Like [`find_closest_match`] but also reports the distance.
pub fn closest_match_within<T: PartialEq>(seq: &[T], reference: &[T], max_dist: usize) -> Option<ClosestMatch> {
    closest_window(seq, reference).filter(|m| m.distance <= max_dist)
}
