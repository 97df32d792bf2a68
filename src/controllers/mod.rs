pub mod bus_controller;
pub mod dashboard_controller;
pub mod reservation_controller;
pub mod route_controller;
pub mod schedule_controller;
