pub mod geometry;
pub mod people;
pub mod text;

// Re-export key types for easier use
pub use geometry::{GeometryError, Polygon, Shape};
pub use people::{Person, UserProfile};
pub use text::is_palindrome;
