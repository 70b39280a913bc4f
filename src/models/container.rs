use crate::models::item::Item;

/// Anything that holds an ordered list of items: rooms, items and the player.
pub trait ItemContainer {
    fn items(&self) -> &[Item];

    /// Owned access to the list, used to insert and remove while keeping sibling order.
    fn items_mut(&mut self) -> &mut Vec<Item>;
}
