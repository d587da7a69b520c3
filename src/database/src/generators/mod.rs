pub mod generator;
pub mod player;

pub use generator::{DatabaseGenerator, GameData};
pub use player::PlayerGenerator;
