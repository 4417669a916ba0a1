use std::rc::Rc;

use carousel::{Carousel, CarouselOptions, ItemContent, ResizePolicy, ScrollPolicy, Size};
use carousel_adapter::{Driver, Easing};

#[derive(Debug)]
struct Photo {
    width: f32,
    height: f32,
}

impl ItemContent for Photo {
    fn intrinsic_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

fn main() -> Result<(), carousel::CarouselError> {
    // Example: a driver performing the carousel's settle animations without holding any UI
    // objects.
    //
    // An adapter would:
    // - forward resolved gestures (drag deltas, release velocity, taps)
    // - call tick(now_ms) in a frame loop / timer while animating
    // - apply the returned offset to the real scroll container
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_resize_policy(ResizePolicy::ItemsPerPage(3))
            .with_scroll_policy(ScrollPolicy::MaxSteps(2)),
    );
    c.configure_with_factory(12, |i| {
        Rc::new(Photo {
            width: 300.0 + 20.0 * i as f32,
            height: 200.0,
        })
    })?;

    let mut d = Driver::new(c).with_animation(240, Easing::SmoothStep);
    let mut now_ms = 0u64;
    if let Some(off) = d.set_viewport(Size::new(300.0, 120.0), now_ms)? {
        println!("initial offset={off}");
    }

    d.on_drag_start();
    for _ in 0..10 {
        now_ms += 16;
        if let Some(off) = d.on_drag(45.0, now_ms) {
            println!("t={now_ms} drag off={off}");
        }
    }
    d.on_drag_end(900.0, now_ms);
    println!("settling to {:?}", d.tween().map(|t| t.to));

    while d.is_animating() {
        now_ms += 16;
        if let Some(off) = d.tick(now_ms) {
            if now_ms.is_multiple_of(80) {
                println!("t={now_ms} off={off}");
            }
        }
    }

    println!(
        "done: off={} selected={:?}",
        d.offset(),
        d.carousel().current_index()
    );
    Ok(())
}
