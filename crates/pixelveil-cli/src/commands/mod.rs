pub mod hide;
pub mod reveal;
pub mod reveal_raw;
