/// How item frames are sized along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizePolicy {
    /// Every item takes the full viewport size; items are separated by `spacing`.
    Fixed(f32),
    /// Every item is offered the viewport size and shrinks to fit its content; items are
    /// separated by `spacing`.
    FitContent(f32),
    /// `n` items share the viewport width, keeping their aspect ratio. No spacing.
    ItemsPerPage(u32),
}

impl ResizePolicy {
    /// Spacing between items, for the spacing-based policies.
    pub fn spacing(self) -> Option<f32> {
        match self {
            Self::Fixed(spacing) | Self::FitContent(spacing) => Some(spacing),
            Self::ItemsPerPage(_) => None,
        }
    }
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

/// How far the user may scroll with a single drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPolicy {
    /// Dragging is disabled; selection changes only by tap or programmatically.
    None,
    /// Dragging may settle on any item.
    #[default]
    Unbounded,
    /// A drag settles at most `k` items away from the current selection.
    MaxSteps(usize),
}

impl ScrollPolicy {
    /// `MaxSteps(0)` cannot move at all and is treated as `None`.
    pub fn normalized(self) -> Self {
        match self {
            Self::MaxSteps(0) => Self::None,
            other => other,
        }
    }

    pub fn allows_scrolling(self) -> bool {
        !matches!(self.normalized(), Self::None)
    }
}

/// Configuration for [`crate::Carousel`].
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    pub resize_policy: ResizePolicy,
    /// Always normalized; see [`ScrollPolicy::normalized`].
    pub scroll_policy: ScrollPolicy,
    /// Whether tapping an item selects it.
    pub select_by_tap: bool,
    /// Index selected once the first layout is available, and the fallback when a gesture
    /// does not resolve to any item.
    pub default_index: usize,
    /// How many logical neighbours are materialized around an item that is about to be shown.
    pub preload_radius: usize,
    /// Multiplier applied to the (clamped) release velocity to predict where a fling rests.
    pub fling_factor: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            resize_policy: ResizePolicy::default(),
            scroll_policy: ScrollPolicy::default(),
            select_by_tap: true,
            default_index: 0,
            preload_radius: 1,
            fling_factor: 1.0,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resize_policy(mut self, resize_policy: ResizePolicy) -> Self {
        self.resize_policy = resize_policy;
        self
    }

    pub fn with_scroll_policy(mut self, scroll_policy: ScrollPolicy) -> Self {
        self.scroll_policy = scroll_policy.normalized();
        self
    }

    pub fn with_select_by_tap(mut self, select_by_tap: bool) -> Self {
        self.select_by_tap = select_by_tap;
        self
    }

    /// Negative indexes are clamped to `0`.
    ///
    /// The index is not checked against the item count here, since options are usually built
    /// before items are assigned.
    pub fn with_default_index(mut self, default_index: i64) -> Self {
        self.default_index = usize::try_from(default_index.max(0)).unwrap_or(usize::MAX);
        self
    }

    pub fn with_preload_radius(mut self, preload_radius: usize) -> Self {
        self.preload_radius = preload_radius;
        self
    }

    pub fn with_fling_factor(mut self, fling_factor: f32) -> Self {
        self.fling_factor = fling_factor;
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("resize_policy", &self.resize_policy)
            .field("scroll_policy", &self.scroll_policy)
            .field("select_by_tap", &self.select_by_tap)
            .field("default_index", &self.default_index)
            .field("preload_radius", &self.preload_radius)
            .field("fling_factor", &self.fling_factor)
            .finish()
    }
}
