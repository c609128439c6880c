pub mod deal;
pub mod match_group;
pub mod user;

// Export the match record types for use throughout the app
pub use deal::Deal;
pub use match_group::{MatchGroup, MatchStatus, Member};
pub use user::{AuthUser, UserProfile};
