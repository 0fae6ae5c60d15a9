pub mod entity;
pub mod player;

pub use entity::Entity;
pub use player::{Player, PlayerRecord};
