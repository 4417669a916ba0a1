// Example: a five-card carousel driven by hand, without any animation.
use std::rc::Rc;

use carousel::{
    Carousel, CarouselObserver, CarouselOptions, ItemContent, Point, ResizePolicy, Size,
};

#[derive(Clone, Debug)]
struct Card(&'static str);

impl ItemContent for Card {
    fn intrinsic_size(&self) -> Size {
        Size::new(80.0, 60.0)
    }
}

struct Printer;

impl CarouselObserver for Printer {
    fn deselected(&self, index: usize) {
        println!("  deselected {index}");
    }

    fn selection_changed(&self, previous: Option<usize>, index: usize, tapped: bool) {
        println!("  selected {index} (previous={previous:?}, tapped={tapped})");
    }
}

fn main() -> Result<(), carousel::CarouselError> {
    let printer: Rc<dyn CarouselObserver> = Rc::new(Printer);
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_resize_policy(ResizePolicy::Fixed(10.0))
            .with_default_index(2),
    );
    c.set_observer(Rc::downgrade(&printer));

    let cards = ["north", "east", "south", "west", "up"]
        .into_iter()
        .map(|name| Rc::new(Card(name)))
        .collect();
    c.configure_with_list_cloned(cards)?;

    println!("set_viewport:");
    let request = c.set_viewport(Size::new(100.0, 100.0))?;
    println!("  request={request:?} content_width={}", c.content_width());

    // The host animates to the requested offset, then reports completion.
    println!("tap:");
    let request = c.tap(Point::new(c.content_offset() + 160.0, 50.0));
    println!("  request={request:?}");
    c.animation_finished();

    println!("drag:");
    c.begin_drag();
    for _ in 0..4 {
        if let Some(jump) = c.drag_update(-120.0) {
            println!("  recentered to {}", jump.x);
        }
    }
    let request = c.end_drag(-40.0);
    println!("  request={request:?}");
    c.animation_finished();

    println!(
        "selected={:?} offset={} materialized={}",
        c.selected_index(),
        c.content_offset(),
        c.store().materialized_len()
    );
    Ok(())
}
