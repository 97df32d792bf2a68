//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al esquema SQLite.

pub mod bus;
pub mod reservation;
pub mod route;
pub mod schedule;
pub mod stats;

pub use bus::{Bus, BusChanges, NewBus};
pub use reservation::{NewReservation, Reservation, ReservationDetail};
pub use route::{NewRoute, Route, RouteChanges};
pub use schedule::{NewSchedule, Schedule, ScheduleChanges, ScheduleDetail};
pub use stats::TableCounts;
