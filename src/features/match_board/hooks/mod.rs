pub mod use_matches;

pub use use_matches::*;
