pub mod club;
pub mod formation;
pub mod player;
pub mod squad;

pub use club::Club;
pub use formation::Formation;
pub use player::{Player, PlayerId, PlayerPosition};
pub use squad::{Squad, SquadSelector};

pub type ClubId = u32;
