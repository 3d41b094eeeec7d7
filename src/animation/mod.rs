pub mod ease;
pub mod tween;
pub mod value;
