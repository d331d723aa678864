pub mod input;
pub mod render;
pub mod resolve;
pub mod trend;
