#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Sparse map keyed by expanded index (or content identity).
#[cfg(feature = "std")]
pub(crate) type SlotMap<V> = HashMap<usize, V>;
#[cfg(not(feature = "std"))]
pub(crate) type SlotMap<V> = BTreeMap<usize, V>;

/// Identity of a shared content allocation.
pub(crate) fn identity<C>(content: &alloc::rc::Rc<C>) -> usize {
    alloc::rc::Rc::as_ptr(content) as *const () as usize
}
