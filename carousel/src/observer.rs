/// Receives selection notifications from a [`crate::Carousel`].
///
/// The carousel holds observers weakly; once the observer is dropped, notifications are
/// silently discarded. For every change, `deselected` (if any) is delivered before
/// `selection_changed`.
pub trait CarouselObserver {
    /// The logical item `index` is no longer selected.
    fn deselected(&self, index: usize) {
        let _ = index;
    }

    /// The logical item `index` became selected. `tapped` is `true` when a tap initiated it.
    fn selection_changed(&self, previous: Option<usize>, index: usize, tapped: bool) {
        let _ = (previous, index, tapped);
    }
}
