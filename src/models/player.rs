use crate::models::container::ItemContainer;
use crate::models::item::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub name: String,
    pub inventory: Vec<Item>,
}

impl ItemContainer for Player {
    fn items(&self) -> &[Item] {
        &self.inventory
    }

    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.inventory
    }
}
