pub mod car_dto;
pub mod price_dto;
