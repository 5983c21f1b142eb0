//! Pairing of variable-length noun group lists into fixed-shape blocks.
//!
//! Verbal nouns and adverbial forms arrive as flat ordered lists of arbitrary
//! length. The detailed chart consumes them two at a time as left/right
//! pairs: an odd-length list is padded with one absent side, and within each
//! pair the presentation order is deliberately swapped relative to input
//! order, so the earlier item of each pair lands on the right - charts read
//! right to left.

use crate::model::GroupPair;

/// Pair a group list two at a time in presentation order.
///
/// For input `[g0, g1, g2, g3]` the pairs are `{right: g0, left: g1}` then
/// `{right: g2, left: g3}`. An odd-length list yields a final pair whose left
/// side is absent; that side still renders (as blank border-suppressed cells)
/// because the other side of the pair is present.
pub fn pair_groups<G>(groups: &[G]) -> impl Iterator<Item = GroupPair<&G>> + '_ {
    groups.chunks(2).map(|chunk| GroupPair {
        right: Some(&chunk[0]),
        left: chunk.get(1),
    })
}
