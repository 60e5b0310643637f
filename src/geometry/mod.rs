pub mod hit_testing;

pub use hit_testing::{element_bounds, hit_test, topmost_hit};
