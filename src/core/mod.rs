pub mod controller;
pub mod input_adapter;

pub use controller::*;
pub use input_adapter::WinitController;
