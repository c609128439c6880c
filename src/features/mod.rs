pub mod auth;
pub mod match_board;
