//! Name and visibility lookup across rooms, containers and the inventory.
//!
//! Searches are depth-first and pre-order, compare names without regard to case, and only
//! descend into items that are open. The first match wins; worlds with two visible items of
//! the same name resolve to whichever comes first in that traversal.
//!
//! Lookups return index paths instead of references so callers can come back for shared or
//! mutable access after doing other lookups in between.

use crate::models::container::ItemContainer;
use crate::models::item::Item;
use crate::models::types::names_match;
use crate::models::world::World;

/// Which top-level list an item path starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    Room,
    Inventory,
}

/// Location of a visible item: the holder plus the index chain through open containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub holder: Holder,
    pub path: Vec<usize>,
}

/// Outcome of `take_item` when something by that name was found.
#[derive(Debug)]
pub enum Take<'a> {
    /// Removed from its container
    Taken(Item),
    /// Found, but not takeable; nothing was changed
    Refused(&'a Item),
}

/// Index path of the first visible item called `name` inside `container`.
pub fn find_item_path<C: ItemContainer + ?Sized>(container: &C, name: &str) -> Option<Vec<usize>> {
    find_in(container.items(), name)
}

fn find_in(items: &[Item], name: &str) -> Option<Vec<usize>> {
    for (idx, item) in items.iter().enumerate() {
        if names_match(&item.name, name) {
            return Some(vec![idx]);
        }
        if item.open {
            if let Some(mut sub) = find_in(&item.items, name) {
                sub.insert(0, idx);
                return Some(sub);
            }
        }
    }
    None
}

pub fn item_at<'a, C: ItemContainer + ?Sized>(
    container: &'a C,
    path: &[usize],
) -> Option<&'a Item> {
    let (first, rest) = path.split_first()?;
    let mut item = container.items().get(*first)?;
    for idx in rest {
        item = item.items.get(*idx)?;
    }
    Some(item)
}

pub fn item_at_mut<'a, C: ItemContainer + ?Sized>(
    container: &'a mut C,
    path: &[usize],
) -> Option<&'a mut Item> {
    let (first, rest) = path.split_first()?;
    let mut item = container.items_mut().get_mut(*first)?;
    for idx in rest {
        item = item.items.get_mut(*idx)?;
    }
    Some(item)
}

/// Looks up `name` in `container` and removes it, but only if it is takeable.
///
/// The search itself never mutates: a non-takeable match comes back as `Take::Refused` so the
/// caller can show the item's own refusal text.
pub fn take_item<'a, C: ItemContainer + ?Sized>(
    container: &'a mut C,
    name: &str,
) -> Option<Take<'a>> {
    let path = find_item_path(&*container, name)?;
    let takeable = item_at(&*container, &path)?.takeable;

    if takeable {
        remove_at(container, &path).map(Take::Taken)
    } else {
        let container: &'a C = container;
        item_at(container, &path).map(Take::Refused)
    }
}

/// Removes the item at `path`, keeping the order of its siblings.
fn remove_at<C: ItemContainer + ?Sized>(container: &mut C, path: &[usize]) -> Option<Item> {
    let (last, parent) = path.split_last()?;
    let siblings = if parent.is_empty() {
        container.items_mut()
    } else {
        &mut item_at_mut(container, parent)?.items
    };
    (*last < siblings.len()).then(|| siblings.remove(*last))
}

impl World {
    /// First visible item called `name` in the current room, then in the inventory.
    pub fn find_item(&self, name: &str) -> Option<ItemRef> {
        if let Some(path) = find_item_path(self.current_room(), name) {
            return Some(ItemRef { holder: Holder::Room, path });
        }
        find_item_path(&self.player, name).map(|path| ItemRef {
            holder: Holder::Inventory,
            path,
        })
    }

    pub fn item(&self, at: &ItemRef) -> Option<&Item> {
        match at.holder {
            Holder::Room => item_at(self.current_room(), &at.path),
            Holder::Inventory => item_at(&self.player, &at.path),
        }
    }

    pub fn item_mut(&mut self, at: &ItemRef) -> Option<&mut Item> {
        match at.holder {
            Holder::Room => item_at_mut(self.current_room_mut(), &at.path),
            Holder::Inventory => item_at_mut(&mut self.player, &at.path),
        }
    }
}
