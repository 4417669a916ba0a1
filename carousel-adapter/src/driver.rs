use carousel::{Carousel, CarouselError, ItemContent, OffsetRequest, Point, Size};

use crate::{Easing, Tween};

/// Default duration of a settle animation spanning at least one page.
const DEFAULT_DURATION_MS: u64 = 250;

/// A framework-neutral driver that wraps a [`carousel::Carousel`] and performs the offset
/// animations it requests.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_viewport` when the container is resized
/// - `on_tap` / `on_drag_start` / `on_drag` / `on_drag_end` with resolved gestures
/// - `tick(now_ms)` each frame/timer tick while [`Self::is_animating`]
///
/// Every method returns the offset the host should scroll to right now, if it changed. When a
/// tween completes, the driver reports it through [`carousel::Carousel::animation_finished`],
/// which is when selection observers are notified.
#[derive(Debug)]
pub struct Driver<C> {
    carousel: Carousel<C>,
    tween: Option<Tween>,
    duration_ms: u64,
    easing: Easing,
}

impl<C: ItemContent + 'static> Driver<C> {
    pub fn new(carousel: Carousel<C>) -> Self {
        Self {
            carousel,
            tween: None,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn with_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<C> {
        &self.carousel
    }

    /// Direct access for configuration. Requests returned by calls made through this reference
    /// must be passed to [`Self::apply`].
    pub fn carousel_mut(&mut self) -> &mut Carousel<C> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel<C> {
        self.carousel
    }

    /// The offset the host should currently display.
    pub fn offset(&self) -> f32 {
        self.carousel.content_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    /// Performs a request returned by the carousel.
    ///
    /// A jump cancels any running tween and is returned immediately. An animated request
    /// starts a tween, or retargets the running one, and returns `None`; the offsets follow
    /// from [`Self::tick`].
    pub fn apply(&mut self, request: Option<OffsetRequest>, now_ms: u64) -> Option<f32> {
        let request = request?;
        if !request.animated {
            self.tween = None;
            return Some(request.x);
        }

        let page = self.carousel.viewport().width;
        match &mut self.tween {
            Some(tween) => tween.retarget_paged(now_ms, request.x, page, self.duration_ms),
            None => {
                let from = self.carousel.content_offset();
                self.tween = Some(Tween::paged(
                    from,
                    request.x,
                    now_ms,
                    page,
                    self.duration_ms,
                    self.easing,
                ));
            }
        }
        adebug!(to = request.x, now_ms, "tween started");
        None
    }

    /// Advances the running tween.
    ///
    /// Returns the new offset, or `None` when nothing is animating. On the final frame the
    /// carousel is told the animation finished, and the settled offset is moved back into the
    /// middle copy if it ended in an outer one.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        let offset = tween.sample(now_ms);
        if let Some(request) = self.carousel.set_content_offset(offset) {
            self.tween = None;
            return Some(request.x);
        }

        if tween.is_done(now_ms) {
            self.tween = None;
            self.carousel.animation_finished();
            let settled = self.carousel.content_offset();
            let offset = self
                .carousel
                .set_content_offset(settled)
                .map_or(settled, |jump| jump.x);
            adebug!(settled, offset, "tween finished");
            return Some(offset);
        }
        Some(offset)
    }

    pub fn set_viewport(&mut self, size: Size, now_ms: u64) -> Result<Option<f32>, CarouselError> {
        let request = self.carousel.set_viewport(size)?;
        if request.is_some() {
            self.tween = None;
        }
        Ok(self.apply(request, now_ms))
    }

    /// Records a scroll position the host produced on its own (e.g. native momentum).
    pub fn on_scroll(&mut self, x: f32, now_ms: u64) -> Option<f32> {
        let request = self.carousel.set_content_offset(x);
        self.apply(request, now_ms)
    }

    pub fn on_tap(&mut self, point: Point, now_ms: u64) -> Option<f32> {
        let request = self.carousel.tap(point);
        self.apply(request, now_ms)
    }

    /// Starts a drag, stopping any settle animation in place.
    ///
    /// Returns `false` (and keeps animating) when the carousel refuses the drag.
    pub fn on_drag_start(&mut self) -> bool {
        if !self.carousel.begin_drag() {
            return false;
        }
        self.tween = None;
        true
    }

    pub fn on_drag(&mut self, delta: f32, now_ms: u64) -> Option<f32> {
        let before = self.carousel.content_offset();
        let request = self.carousel.drag_update(delta);
        let moved = self.carousel.content_offset();
        self.apply(request, now_ms).or((moved != before).then_some(moved))
    }

    pub fn on_drag_end(&mut self, velocity: f32, now_ms: u64) -> Option<f32> {
        let request = self.carousel.end_drag(velocity);
        self.apply(request, now_ms)
    }

    /// Selects the item at expanded index `index`, animating with the driver's settings.
    pub fn select_item(&mut self, index: usize, animated: bool, now_ms: u64) -> Option<f32> {
        let request = self.carousel.select_item(index, animated);
        self.apply(request, now_ms)
    }
}
