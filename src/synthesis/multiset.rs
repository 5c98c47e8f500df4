//! Order-independent multiset comparison.

use smallvec::SmallVec;

/// Returns true iff `a` and `b` hold the same tokens with the same
/// multiplicities, in any order.
///
/// ```
/// use elemental_synth::core::Element::{H, O};
/// use elemental_synth::synthesis::multiset_equal;
///
/// assert!(multiset_equal(&[H, H, O], &[H, O, H]));
/// assert!(!multiset_equal(&[H, H, O], &[H, O]));
/// ```
#[must_use]
pub fn multiset_equal<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // Recipe inputs are at most five tokens; stay on the stack.
    let mut left: SmallVec<[T; 8]> = a.iter().cloned().collect();
    let mut right: SmallVec<[T; 8]> = b.iter().cloned().collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}
