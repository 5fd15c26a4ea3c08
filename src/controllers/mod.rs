pub mod car_controller;
pub mod price_controller;

pub use car_controller::CarController;
pub use price_controller::PriceController;
