use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::index;
use crate::key::{SlotMap, identity};
use crate::{CarouselError, Frame, Layout, Size};

/// Content shown by a carousel item.
///
/// The carousel never renders content; it only asks for sizes when the resize policy depends
/// on them.
pub trait ItemContent {
    /// The size the content had before the carousel resized it.
    fn intrinsic_size(&self) -> Size;

    /// The size the content wants when offered `proposed`. Defaults to filling it.
    fn size_that_fits(&self, proposed: Size) -> Size {
        proposed
    }
}

/// Produces content for a logical index. Must return a new object on every call.
pub type ItemFactory<C> = Box<dyn FnMut(usize) -> Rc<C>>;

/// A cached item at one expanded index.
#[derive(Debug)]
pub struct MaterializedItem<C> {
    pub expanded_index: usize,
    pub logical_index: usize,
    pub content: Rc<C>,
    /// Frame from the most recent layout this item was read through.
    pub frame: Frame,
}

enum ItemSource<C> {
    Empty,
    List {
        /// Shown in the middle copy, so host-visible identity is preserved.
        originals: Vec<Rc<C>>,
        /// `count` copies for the first third followed by `count` for the last third.
        copies: Vec<Rc<C>>,
    },
    Factory(ItemFactory<C>),
}

/// Virtualized registry mapping expanded indexes to lazily materialized items.
///
/// Entries are created on first access and never evicted; at most one entry exists per
/// expanded index, and no content object may back two different entries.
pub struct ItemStore<C> {
    source: ItemSource<C>,
    count: usize,
    items: SlotMap<MaterializedItem<C>>,
    /// Content identity -> expanded index it was registered at.
    identities: SlotMap<usize>,
}

impl<C> Default for ItemStore<C> {
    fn default() -> Self {
        Self {
            source: ItemSource::Empty,
            count: 0,
            items: SlotMap::new(),
            identities: SlotMap::new(),
        }
    }
}

impl<C> ItemStore<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct logical items.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn expanded_count(&self) -> usize {
        index::expanded_count(self.count)
    }

    /// Replaces the store with a static list.
    ///
    /// The middle copy reuses `items` as-is; both outer copies are produced eagerly through
    /// `duplicate`, so a copy failure is reported here rather than mid-gesture. On error the
    /// store is left unchanged.
    pub fn configure_with_list(
        &mut self,
        items: Vec<Rc<C>>,
        mut duplicate: impl FnMut(&C) -> Option<C>,
    ) -> Result<(), CarouselError> {
        let count = items.len();
        let mut seen = SlotMap::<usize>::new();
        for (i, item) in items.iter().enumerate() {
            if let Some(&existing) = seen.get(&identity(item)) {
                cwarn!(index = i, existing, "configure_with_list: duplicate item");
                return Err(CarouselError::DuplicateContent {
                    index: count + i,
                    existing: count + existing,
                });
            }
            seen.insert(identity(item), i);
        }

        let mut copies = Vec::with_capacity(count * 2);
        for _ in 0..2 {
            for (i, item) in items.iter().enumerate() {
                let copy = duplicate(item).ok_or(CarouselError::CopyFailed { index: i })?;
                copies.push(Rc::new(copy));
            }
        }

        cdebug!(count, "ItemStore::configure_with_list");
        *self = Self {
            source: ItemSource::List {
                originals: items,
                copies,
            },
            count,
            ..Self::default()
        };
        Ok(())
    }

    /// Replaces the store with a factory producing content for each logical index.
    ///
    /// The factory runs lazily, once per expanded index, the first time that index is read.
    /// Returning an object that already backs another index makes that read fail with
    /// [`CarouselError::DuplicateContent`].
    pub fn configure_with_factory(
        &mut self,
        count: usize,
        factory: impl FnMut(usize) -> Rc<C> + 'static,
    ) where
        C: 'static,
    {
        cdebug!(count, "ItemStore::configure_with_factory");
        *self = Self {
            source: ItemSource::Factory(Box::new(factory)),
            count,
            ..Self::default()
        };
    }

    /// Returns the original items of a list-configured store (empty for factories).
    pub fn items(&self) -> &[Rc<C>] {
        match &self.source {
            ItemSource::List { originals, .. } => originals,
            ItemSource::Empty | ItemSource::Factory(_) => &[],
        }
    }

    /// Returns the item at `expanded`, materializing it on first access.
    ///
    /// The cached entry's frame is refreshed from `layout`.
    pub fn get(
        &mut self,
        expanded: usize,
        layout: &Layout,
    ) -> Result<&MaterializedItem<C>, CarouselError> {
        let frame = layout.frame(expanded).unwrap_or_default();
        let item = self.slot(expanded)?;
        item.frame = frame;
        Ok(&*item)
    }

    /// Returns the content at `expanded`, materializing it on first access.
    pub fn content(&mut self, expanded: usize) -> Result<Rc<C>, CarouselError> {
        self.slot(expanded).map(|item| Rc::clone(&item.content))
    }

    /// Returns an already materialized item without creating it.
    pub fn cached(&self, expanded: usize) -> Option<&MaterializedItem<C>> {
        self.items.get(&expanded)
    }

    pub fn is_materialized(&self, expanded: usize) -> bool {
        self.items.contains_key(&expanded)
    }

    pub fn materialized_len(&self) -> usize {
        self.items.len()
    }

    /// Materializes the middle copy of every logical item.
    pub fn materialize_middle(&mut self) -> Result<(), CarouselError> {
        let count = self.count;
        for logical in 0..count {
            self.slot(count + logical)?;
        }
        Ok(())
    }

    /// Materializes every copy of the logical items within `radius` of `center`.
    ///
    /// The window is clamped to `0..count`; it does not wrap.
    pub fn preload_window(
        &mut self,
        center: usize,
        radius: usize,
        layout: &Layout,
    ) -> Result<(), CarouselError> {
        if self.count == 0 {
            return Ok(());
        }
        let last = self.count - 1;
        let lo = center.saturating_sub(radius).min(last);
        let hi = center.saturating_add(radius).min(last);
        ctrace!(center, radius, lo, hi, "preload_window");
        for logical in lo..=hi {
            for copy in 0..index::COPIES {
                self.get(copy * self.count + logical, layout)?;
            }
        }
        Ok(())
    }

    fn slot(&mut self, expanded: usize) -> Result<&mut MaterializedItem<C>, CarouselError> {
        let invalid = CarouselError::InvalidState {
            index: expanded,
            count: self.count,
        };
        if expanded >= self.expanded_count() {
            return Err(invalid);
        }

        if !self.items.contains_key(&expanded) {
            let logical = index::to_logical(expanded, self.count)?;
            let content = self.produce(expanded, logical)?;
            let id = identity(&content);
            if let Some(&existing) = self.identities.get(&id) {
                cwarn!(expanded, existing, "content already registered");
                return Err(CarouselError::DuplicateContent {
                    index: expanded,
                    existing,
                });
            }
            self.identities.insert(id, expanded);
            ctrace!(expanded, logical, "materialized item");
            self.items.insert(
                expanded,
                MaterializedItem {
                    expanded_index: expanded,
                    logical_index: logical,
                    content,
                    frame: Frame::default(),
                },
            );
        }

        self.items.get_mut(&expanded).ok_or(invalid)
    }

    fn produce(&mut self, expanded: usize, logical: usize) -> Result<Rc<C>, CarouselError> {
        let count = self.count;
        let invalid = CarouselError::InvalidState {
            index: expanded,
            count,
        };
        match &mut self.source {
            ItemSource::Empty => Err(invalid),
            ItemSource::List { originals, copies } => {
                let content = match expanded / count {
                    0 => copies.get(logical),
                    1 => originals.get(logical),
                    _ => copies.get(count + logical),
                };
                content.cloned().ok_or(invalid)
            }
            ItemSource::Factory(factory) => Ok(factory(logical)),
        }
    }
}

impl<C> core::fmt::Debug for ItemStore<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let source = match &self.source {
            ItemSource::Empty => "Empty",
            ItemSource::List { .. } => "List",
            ItemSource::Factory(_) => "Factory",
        };
        f.debug_struct("ItemStore")
            .field("source", &source)
            .field("count", &self.count)
            .field("materialized", &self.items.len())
            .finish_non_exhaustive()
    }
}
