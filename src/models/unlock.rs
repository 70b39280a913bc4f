use crate::models::types::names_match;

/// Shared behaviour of items and exits that can be locked and opened with a key item.
pub trait Unlockable {
    fn name(&self) -> &str;
    fn is_locked(&self) -> bool;
    /// Name of the item that unlocks this entity.
    fn unlock_key(&self) -> &str;
    /// Text shown once unlocked.
    fn unlock_message(&self) -> &str;
    /// Clears the lock and applies the post-unlock name and description, if any.
    fn unlock(&mut self);

    /// True when `key` is the item that unlocks this locked entity.
    fn unlocks_with(&self, key: &str) -> bool {
        self.is_locked() && names_match(self.unlock_key(), key)
    }
}
