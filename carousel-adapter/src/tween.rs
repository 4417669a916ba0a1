/// A small tween helper for host-driven offset animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        self.from + (self.to - self.from) * eased
    }

    /// Restarts from the current sampled position towards `new_to`.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }

    /// A settle tween whose duration grows with the distance travelled, reaching
    /// `max_duration_ms` at one page (viewport width) or more.
    pub fn paged(
        from: f32,
        to: f32,
        start_ms: u64,
        page_width: f32,
        max_duration_ms: u64,
        easing: Easing,
    ) -> Self {
        let duration_ms = paged_duration(to - from, page_width, max_duration_ms);
        Self::new(from, to, start_ms, duration_ms, easing)
    }

    /// Like [`Self::retarget`], with the duration of [`Self::paged`].
    pub fn retarget_paged(
        &mut self,
        now_ms: u64,
        new_to: f32,
        page_width: f32,
        max_duration_ms: u64,
    ) {
        let cur = self.sample(now_ms);
        *self = Self::paged(cur, new_to, now_ms, page_width, max_duration_ms, self.easing);
    }
}

fn paged_duration(distance: f32, page_width: f32, max_duration_ms: u64) -> u64 {
    if page_width.is_nan() || page_width <= 0.0 || !distance.is_finite() {
        return max_duration_ms;
    }
    let pages = (distance.abs() / page_width).min(1.0);
    (max_duration_ms as f32 * pages).ceil() as u64
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
