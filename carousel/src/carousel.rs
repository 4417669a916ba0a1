use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;

use crate::hit;
use crate::index;
use crate::{
    CarouselError, CarouselObserver, CarouselOptions, ItemContent, ItemStore, Layout,
    LayoutEngine, MaterializedItem, OffsetRequest, Phase, Point, ResizePolicy, ScrollPolicy,
    SelectionController, SelectionState, Size, ViewportState,
};

/// A headless, infinitely looping horizontal carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not render or animate anything.
/// - The host reports viewport geometry, scroll offsets and resolved gestures.
/// - Whenever the viewport should move, a method returns an [`OffsetRequest`]; for animated
///   requests the host reports completion through [`Self::animation_finished`].
///
/// Items are laid out three times back to back (see [`crate::index`]). Offsets, frames and
/// [`Self::select_item`] use expanded indexes; selection notifications and
/// [`Self::selected_index`] use logical indexes.
pub struct Carousel<C> {
    options: CarouselOptions,
    store: ItemStore<C>,
    layout: LayoutEngine,
    selection: SelectionController,
    viewport: Size,
    offset: f32,
    observer: Option<Weak<dyn CarouselObserver>>,
    default_applied: bool,
    /// Copy of the committed selection the current drag started from, shifted along with
    /// every recenter.
    drag_origin: Option<usize>,
}

impl<C: ItemContent + 'static> Carousel<C> {
    pub fn new(options: CarouselOptions) -> Self {
        let options = CarouselOptions {
            scroll_policy: options.scroll_policy.normalized(),
            ..options
        };
        cdebug!(?options, "Carousel::new");
        Self {
            store: ItemStore::new(),
            layout: LayoutEngine::new(options.resize_policy),
            selection: SelectionController::new(options.scroll_policy),
            viewport: Size::default(),
            offset: 0.0,
            observer: None,
            default_applied: false,
            drag_origin: None,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Registers the selection observer. Only a weak reference is kept.
    pub fn set_observer(&mut self, observer: Weak<dyn CarouselObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Replaces the items with a static list.
    ///
    /// The original items back the middle copy; `duplicate` produces the two outer copies.
    /// On error the carousel keeps its previous items, layout and selection.
    pub fn configure_with_list(
        &mut self,
        items: Vec<Rc<C>>,
        duplicate: impl FnMut(&C) -> Option<C>,
    ) -> Result<Option<OffsetRequest>, CarouselError> {
        let mut store = ItemStore::new();
        store.configure_with_list(items, duplicate)?;
        self.install(store)
    }

    /// Like [`Self::configure_with_list`], copying items with `Clone`.
    pub fn configure_with_list_cloned(
        &mut self,
        items: Vec<Rc<C>>,
    ) -> Result<Option<OffsetRequest>, CarouselError>
    where
        C: Clone,
    {
        self.configure_with_list(items, |item| Some(item.clone()))
    }

    /// Replaces the items with a factory invoked at most once per expanded index.
    ///
    /// The middle copy of every logical index is materialized immediately, so a factory that
    /// hands out the same object for two indexes fails here with
    /// [`CarouselError::DuplicateContent`]. The outer copies stay lazy.
    pub fn configure_with_factory(
        &mut self,
        count: usize,
        factory: impl FnMut(usize) -> Rc<C> + 'static,
    ) -> Result<Option<OffsetRequest>, CarouselError> {
        let mut store = ItemStore::new();
        store.configure_with_factory(count, factory);
        store.materialize_middle()?;
        self.install(store)
    }

    fn install(&mut self, mut store: ItemStore<C>) -> Result<Option<OffsetRequest>, CarouselError> {
        let layout =
            self.layout
                .compute(self.viewport, store.expanded_count(), |i| store.content(i))?;
        store.preload_window(
            self.options.default_index,
            self.options.preload_radius,
            &layout,
        )?;

        cdebug!(count = store.count(), "Carousel::install");
        self.store = store;
        self.layout.commit(layout);
        self.selection.reset();
        self.offset = 0.0;
        self.default_applied = false;
        self.drag_origin = None;
        Ok(self.apply_default_selection())
    }

    pub fn set_resize_policy(
        &mut self,
        policy: ResizePolicy,
    ) -> Result<Option<OffsetRequest>, CarouselError> {
        let previous = self.layout.policy();
        self.layout.set_policy(policy);
        match self.relayout() {
            Ok(request) => {
                self.options.resize_policy = policy;
                Ok(request)
            }
            Err(err) => {
                self.layout.set_policy(previous);
                Err(err)
            }
        }
    }

    pub fn set_scroll_policy(&mut self, policy: ScrollPolicy) {
        self.options.scroll_policy = policy.normalized();
        self.selection.set_policy(policy);
    }

    pub fn set_select_by_tap(&mut self, select_by_tap: bool) {
        self.options.select_by_tap = select_by_tap;
    }

    /// Updates the viewport size and lays items out again.
    pub fn set_viewport(&mut self, size: Size) -> Result<Option<OffsetRequest>, CarouselError> {
        if self.viewport == size {
            return Ok(None);
        }
        let previous = core::mem::replace(&mut self.viewport, size);
        self.relayout().inspect_err(|_| self.viewport = previous)
    }

    fn relayout(&mut self) -> Result<Option<OffsetRequest>, CarouselError> {
        let store = &mut self.store;
        let layout = self
            .layout
            .compute(self.viewport, store.expanded_count(), |i| store.content(i))?;
        self.layout.commit(layout);

        if self.layout.layout().is_empty() {
            return Ok(None);
        }
        if !self.default_applied {
            return Ok(self.apply_default_selection());
        }

        // Keep the committed selection centred; a pending gesture no longer matches the
        // geometry.
        self.selection.cancel();
        self.drag_origin = None;
        let count = self.store.count();
        let Some(index) = self.selection.current_index() else {
            return Ok(None);
        };
        let Some(x) = self.offset_for(count + index) else {
            return Ok(None);
        };
        self.offset = x;
        Ok(Some(OffsetRequest { x, animated: false }))
    }

    fn apply_default_selection(&mut self) -> Option<OffsetRequest> {
        if self.store.is_empty() || self.layout.layout().is_empty() {
            return None;
        }
        self.default_applied = true;
        let default = self.options.default_index;
        if default >= self.store.count() {
            cwarn!(
                default,
                count = self.store.count(),
                "default index out of range"
            );
            return None;
        }
        self.select_item(default, false)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &ItemStore<C> {
        &self.store
    }

    /// The original items, for list-configured carousels.
    pub fn items(&self) -> &[Rc<C>] {
        self.store.items()
    }

    pub fn layout(&self) -> &Layout {
        self.layout.layout()
    }

    pub fn content_width(&self) -> f32 {
        self.layout.content_width()
    }

    pub fn max_fling_velocity(&self) -> f32 {
        self.layout.max_fling_velocity()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn content_offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            size: self.viewport,
            offset: self.offset,
        }
    }

    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Logical index of the last committed selection.
    pub fn current_index(&self) -> Option<usize> {
        self.selection.current_index()
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.selection.is_scroll_enabled()
    }

    /// Logical index of the item under the viewport centre.
    ///
    /// Falls back to the default index when no item is there, and is `None` for an empty
    /// carousel.
    pub fn selected_index(&self) -> Option<usize> {
        let count = self.store.count();
        if count == 0 {
            return None;
        }
        let x = self.offset + self.viewport.width / 2.0;
        hit::index_at_x(self.layout.layout(), x)
            .map(|expanded| expanded % count)
            .or_else(|| {
                let default = self.options.default_index;
                (default < count).then_some(default)
            })
    }

    /// Logical index of the item containing `point` (content coordinates).
    pub fn index_at(&self, point: Point) -> Option<usize> {
        let count = self.store.count();
        if count == 0 {
            return None;
        }
        hit::index_at(self.layout.layout(), point).map(|expanded| expanded % count)
    }

    /// Returns the item containing `point`, or the closest one beside it.
    pub fn nearest_item(&mut self, point: Point) -> Option<&MaterializedItem<C>> {
        let step = hit::probe_step(self.layout.policy());
        let expanded = hit::nearest_index(self.layout.layout(), point, step)?;
        self.preload(expanded);
        match self.store.get(expanded, self.layout.layout()) {
            Ok(item) => Some(item),
            Err(_err) => {
                cwarn!(expanded, error = %_err, "nearest_item: materialization failed");
                None
            }
        }
    }

    /// Returns the item at an expanded index, materializing it on first access.
    pub fn item(&mut self, expanded: usize) -> Result<&MaterializedItem<C>, CarouselError> {
        self.store.get(expanded, self.layout.layout())
    }

    /// The offset that moves the viewport back toward the middle copy, if it has drifted into
    /// an outer third.
    pub fn recenter_offset(&self) -> Option<f32> {
        if self.store.is_empty() {
            return None;
        }
        index::recenter(self.offset, self.layout.content_width())
    }

    /// Records a scroll position reported by the host.
    ///
    /// Returns a non-animated recentering request when the viewport crossed into an outer
    /// third, unless a selection is settling.
    pub fn set_content_offset(&mut self, x: f32) -> Option<OffsetRequest> {
        self.offset = x;
        if self.selection.is_settling() {
            return None;
        }
        self.recenter()
    }

    fn recenter(&mut self) -> Option<OffsetRequest> {
        let x = self.recenter_offset()?;
        ctrace!(from = self.offset, to = x, "recenter");
        if let Some(origin) = self.drag_origin {
            let count = self.store.count();
            let shifted = if x > self.offset {
                origin.checked_add(count)
            } else {
                origin.checked_sub(count)
            };
            self.drag_origin = shifted
                .filter(|&origin| origin < self.store.expanded_count())
                .or(Some(origin));
        }
        self.offset = x;
        Some(OffsetRequest { x, animated: false })
    }

    /// Starts a drag. Returns `false` when scrolling is disabled or there are no items.
    pub fn begin_drag(&mut self) -> bool {
        let count = self.store.count();
        if count == 0 || !self.selection.begin_drag() {
            return false;
        }
        self.drag_origin = self.selection.current_index().and_then(|current| {
            let centre = self.offset + self.viewport.width / 2.0;
            let near = hit::index_at_x(self.layout.layout(), centre).unwrap_or(count + current);
            index::nearest_copy(current, near, count)
        });
        true
    }

    /// Moves the viewport by `delta` during a drag.
    pub fn drag_update(&mut self, delta: f32) -> Option<OffsetRequest> {
        if self.selection.phase() != Phase::Dragging {
            return None;
        }
        self.offset += delta;
        self.recenter()
    }

    /// Ends a drag released at `velocity` and settles on the item nearest the predicted rest
    /// position.
    pub fn end_drag(&mut self, velocity: f32) -> Option<OffsetRequest> {
        let count = self.store.count();
        if count == 0 {
            return None;
        }
        let velocity = self
            .selection
            .end_drag(velocity, self.layout.max_fling_velocity())?;

        let rest = self.offset + velocity * self.options.fling_factor;
        let point = Point::new(
            rest + self.viewport.width / 2.0,
            self.viewport.height / 2.0,
        );
        let step = hit::probe_step(self.layout.policy());
        let Some(resolved) = hit::nearest_index(self.layout.layout(), point, step) else {
            cwarn!(rest, "end_drag: no item near rest offset");
            self.drag_origin = None;
            self.selection.cancel();
            return None;
        };

        let origin = self.drag_origin.take().or_else(|| {
            let current = self.selection.current_index()?;
            index::nearest_copy(current, resolved, count)
        });
        let target = match origin {
            Some(origin) => self.selection.limit_target(origin, resolved, count),
            None => resolved,
        };
        ctrace!(velocity, rest, resolved, target, "end_drag");
        self.settle(target, true)
    }

    /// Handles a tap at `point` (content coordinates).
    pub fn tap(&mut self, point: Point) -> Option<OffsetRequest> {
        if !self.options.select_by_tap || self.store.is_empty() {
            return None;
        }
        let layout = self.layout.layout();
        let step = hit::probe_step(self.layout.policy());
        let target =
            hit::index_at(layout, point).or_else(|| hit::nearest_index(layout, point, step))?;
        ctrace!(x = point.x, y = point.y, target, "tap");
        self.drag_origin = None;
        self.selection.begin_tap();
        self.settle(target, true)
    }

    /// Centres the item at expanded index `index`.
    ///
    /// The selection commits immediately when `animated` is `false` or the viewport is already
    /// there; otherwise it commits on [`Self::animation_finished`].
    pub fn select_item(&mut self, index: usize, animated: bool) -> Option<OffsetRequest> {
        if self.store.is_empty() {
            return None;
        }
        if index >= self.store.expanded_count() {
            cwarn!(
                index,
                count = self.store.count(),
                "select_item: index out of range"
            );
            return None;
        }
        self.settle(index, animated)
    }

    /// Called by the host when an animated [`OffsetRequest`] has finished.
    pub fn animation_finished(&mut self) {
        let Phase::Settling { target, .. } = self.selection.phase() else {
            return;
        };
        if let Some(x) = self.offset_for(target) {
            self.offset = x;
        }
        self.commit();
    }

    fn settle(&mut self, target: usize, animated: bool) -> Option<OffsetRequest> {
        let Some(x) = self.offset_for(target) else {
            cwarn!(target, "settle: no frame for target");
            self.selection.cancel();
            return None;
        };
        self.preload(target);

        let motionless = x == self.offset;
        self.selection.settle(target, animated);
        ctrace!(target, x, animated, motionless, "settle");
        if !animated || motionless {
            self.offset = x;
            self.commit();
        }
        Some(OffsetRequest {
            x,
            animated: animated && !motionless,
        })
    }

    fn commit(&mut self) {
        let Some(change) = self.selection.commit(self.store.count()) else {
            return;
        };
        ctrace!(
            previous = ?change.previous,
            index = change.index,
            tapped = change.tapped,
            "selection committed"
        );
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        if let Some(previous) = change.deselected() {
            observer.deselected(previous);
        }
        observer.selection_changed(change.previous, change.index, change.tapped);
    }

    fn offset_for(&self, expanded: usize) -> Option<f32> {
        let frame = self.layout.frame(expanded)?;
        Some(frame.center_x() - self.viewport.width / 2.0)
    }

    fn preload(&mut self, expanded: usize) {
        let Ok(logical) = index::to_logical(expanded, self.store.count()) else {
            return;
        };
        let radius = self.options.preload_radius;
        if let Err(_err) = self
            .store
            .preload_window(logical, radius, self.layout.layout())
        {
            cwarn!(logical, error = %_err, "preload failed");
        }
    }
}

impl<C> core::fmt::Debug for Carousel<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("store", &self.store)
            .field("layout", &self.layout)
            .field("selection", &self.selection)
            .field("viewport", &self.viewport)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
