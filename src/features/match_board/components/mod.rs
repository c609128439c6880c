pub mod avatar;
pub mod board;
pub mod column;
pub mod loader;
pub mod match_card;

pub use avatar::AvatarSlot;
pub use board::MatchBoard;
pub use column::MatchColumn;
pub use loader::Loader;
pub use match_card::MatchCard;
