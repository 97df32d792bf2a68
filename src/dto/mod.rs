pub mod bus_dto;
pub mod common_dto;
pub mod reservation_dto;
pub mod route_dto;
pub mod schedule_dto;
