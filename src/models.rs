pub mod container;
pub mod dictionary;
pub mod exit;
pub mod item;
pub mod player;
pub mod room;
pub mod types;
pub mod unlock;
pub mod world;

pub use container::ItemContainer;
pub use dictionary::Dictionary;
pub use exit::Exit;
pub use item::Item;
pub use player::Player;
pub use room::Room;
pub use types::RoomId;
pub use unlock::Unlockable;
pub use world::World;
