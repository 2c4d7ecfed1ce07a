use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{ExchangeMode, exchange_in_place};

/// What the host's data layer must provide for drag-and-drop reordering.
///
/// The controller never touches the backing sequence directly. It only reports dragging state
/// and requests exactly one exchange per successful drop.
pub trait ReorderableCollection {
    /// Identity of an item as seen by the list widget (e.g. a row key or view handle).
    type Item;

    /// Called when a drag starts or ends. Hosts typically use this to change how rows render
    /// (e.g. skip view recycling while dragging).
    fn set_dragging(&mut self, dragging: bool);

    /// The last value passed to [`ReorderableCollection::set_dragging`].
    fn is_dragging(&self) -> bool;

    /// Moves `from` to the position of `to` in the backing order and refreshes presentation.
    fn exchange_item(&mut self, from: &Self::Item, to: &Self::Item);
}

/// A `Vec`-backed [`ReorderableCollection`] keyed by a user-supplied key function.
///
/// Drop targets are resolved to indices by key at exchange time, then reordered with the
/// configured [`ExchangeMode`].
pub struct SortableList<T, K> {
    items: Vec<T>,
    key_of: Box<dyn Fn(&T) -> K + Send + Sync>,
    mode: ExchangeMode,
    dragging: bool,
    revision: u64,
}

impl<T, K: PartialEq> SortableList<T, K> {
    pub fn new(items: Vec<T>, key_of: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            items,
            key_of: Box::new(key_of),
            mode: ExchangeMode::default(),
            dragging: false,
            revision: 0,
        }
    }

    pub fn with_mode(mut self, mode: ExchangeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    pub fn mode(&self) -> ExchangeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ExchangeMode) {
        self.mode = mode;
    }

    /// Bumped once per applied exchange.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|it| (self.key_of)(it) == *key)
    }
}

impl<T, K: PartialEq> ReorderableCollection for SortableList<T, K> {
    type Item = K;

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn exchange_item(&mut self, from: &K, to: &K) {
        let (Some(from_index), Some(to_index)) = (self.index_of(from), self.index_of(to)) else {
            dwarn!("SortableList::exchange_item: unknown key, ignoring");
            return;
        };
        dtrace!(from_index, to_index, mode = ?self.mode, "SortableList::exchange_item");
        exchange_in_place(&mut self.items, from_index, to_index, self.mode);
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: fmt::Debug, K> fmt::Debug for SortableList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableList")
            .field("items", &self.items)
            .field("mode", &self.mode)
            .field("dragging", &self.dragging)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
