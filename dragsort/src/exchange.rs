use alloc::vec::Vec;

/// How [`exchange`] repositions the source element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExchangeMode {
    /// Swap the two positions; everything else stays put.
    #[default]
    Simple,
    /// Remove the source element and reinsert it at the destination, closing the gap it leaves
    /// (a list "move").
    Close,
}

/// Returns a reordered copy of `items` with `from` exchanged to `to` according to `mode`.
///
/// The input is never mutated. `from == to` yields an identical copy in either mode.
///
/// Indices are a caller contract: out-of-range indices trip a debug assertion and panic on
/// slice access otherwise.
///
/// ```
/// use dragsort::{exchange, ExchangeMode};
///
/// let s = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(exchange(&s, 0, 3, ExchangeMode::Simple), ['d', 'b', 'c', 'a', 'e']);
/// assert_eq!(exchange(&s, 0, 3, ExchangeMode::Close), ['b', 'c', 'd', 'a', 'e']);
/// assert_eq!(exchange(&s, 3, 0, ExchangeMode::Close), ['d', 'a', 'b', 'c', 'e']);
/// ```
pub fn exchange<T: Clone>(items: &[T], from: usize, to: usize, mode: ExchangeMode) -> Vec<T> {
    let mut out = items.to_vec();
    exchange_in_place(&mut out, from, to, mode);
    out
}

/// Applies the same permutation as [`exchange`] directly to `items`.
pub fn exchange_in_place<T>(items: &mut [T], from: usize, to: usize, mode: ExchangeMode) {
    debug_assert!(
        from < items.len() && to < items.len(),
        "exchange: index out of bounds (from={from}, to={to}, len={})",
        items.len()
    );
    if from == to {
        return;
    }

    match mode {
        ExchangeMode::Simple => items.swap(from, to),
        // Rotating the closed span by one is exactly remove(from) + insert(to).
        ExchangeMode::Close if from < to => items[from..=to].rotate_left(1),
        ExchangeMode::Close => items[to..=from].rotate_right(1),
    }
}
