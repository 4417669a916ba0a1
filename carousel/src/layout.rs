use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::{CarouselError, Frame, ItemContent, ResizePolicy, Size};

/// `max_fling_velocity = content_width / FLING_VELOCITY_DIVISOR`.
pub const FLING_VELOCITY_DIVISOR: f32 = 6.0;

/// Geometry of every expanded item, laid out left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    viewport: Size,
    frames: Vec<Frame>,
    content_width: f32,
    max_fling_velocity: f32,
}

impl Layout {
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn frame(&self, expanded: usize) -> Option<Frame> {
        self.frames.get(expanded).copied()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Upper bound on the magnitude of a single fling.
    pub fn max_fling_velocity(&self) -> f32 {
        self.max_fling_velocity
    }
}

/// Computes item frames and the total content extent for a [`ResizePolicy`].
#[derive(Clone, Debug, Default)]
pub struct LayoutEngine {
    policy: ResizePolicy,
    current: Layout,
}

impl LayoutEngine {
    pub fn new(policy: ResizePolicy) -> Self {
        Self {
            policy,
            current: Layout::default(),
        }
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Changes the policy. The current layout is stale until the next [`Self::commit`].
    pub fn set_policy(&mut self, policy: ResizePolicy) {
        self.policy = policy;
    }

    pub fn layout(&self) -> &Layout {
        &self.current
    }

    pub fn frame(&self, expanded: usize) -> Option<Frame> {
        self.current.frame(expanded)
    }

    pub fn content_width(&self) -> f32 {
        self.current.content_width
    }

    pub fn max_fling_velocity(&self) -> f32 {
        self.current.max_fling_velocity
    }

    /// Lays out `count` expanded items inside `viewport`.
    ///
    /// `content` is only consulted by policies that depend on content size, so a `Fixed`
    /// layout materializes nothing. An empty viewport produces an empty layout.
    pub fn compute<C: ItemContent>(
        &self,
        viewport: Size,
        count: usize,
        mut content: impl FnMut(usize) -> Result<Rc<C>, CarouselError>,
    ) -> Result<Layout, CarouselError> {
        if viewport.is_empty() || count == 0 {
            return Ok(Layout {
                viewport,
                ..Layout::default()
            });
        }

        let mut frames = Vec::with_capacity(count);
        let mut x = 0.0f32;
        let content_width = match self.policy {
            ResizePolicy::Fixed(spacing) => {
                for _ in 0..count {
                    frames.push(Frame::new(x, 0.0, viewport.width, viewport.height));
                    x += viewport.width + spacing;
                }
                x
            }
            ResizePolicy::FitContent(spacing) => {
                for i in 0..count {
                    let fitted = content(i)?.size_that_fits(viewport);
                    frames.push(Frame::new(x, 0.0, fitted.width, fitted.height));
                    x += fitted.width + spacing;
                }
                x
            }
            ResizePolicy::ItemsPerPage(per_page) => {
                let per_page = per_page.max(1) as f32;
                let width = viewport.width / per_page;
                // Extent scales the pre-resize widths rather than summing placed widths.
                let mut extent = 0.0f32;
                for i in 0..count {
                    let intrinsic = content(i)?.intrinsic_size();
                    let height = if intrinsic.width > 0.0 && intrinsic.height > 0.0 {
                        (width * intrinsic.height / intrinsic.width)
                            .floor()
                            .min(viewport.height)
                    } else {
                        viewport.height
                    };
                    frames.push(Frame::new(x, 0.0, width, height));
                    x += width;
                    extent += intrinsic.width / per_page;
                }
                extent
            }
        };

        let max_fling_velocity = content_width / FLING_VELOCITY_DIVISOR;
        cdebug!(
            count,
            content_width,
            max_fling_velocity,
            "LayoutEngine::compute"
        );
        Ok(Layout {
            viewport,
            frames,
            content_width,
            max_fling_velocity,
        })
    }

    pub fn commit(&mut self, layout: Layout) {
        self.current = layout;
    }
}
