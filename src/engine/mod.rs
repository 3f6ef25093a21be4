pub mod masonry;
pub mod trigger;
