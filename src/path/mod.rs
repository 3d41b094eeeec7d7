pub mod controller;
pub mod offset;
pub mod options;
pub mod surface;
