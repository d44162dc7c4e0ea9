//! Stochastic yardage model and clock model.
//!
//! Both depend only on the canonical family enums, never on the concrete
//! play catalog.

pub mod clock;
pub mod yardage;

pub use clock::{clock_runoff, ClockModel};
pub use yardage::{band, base_band, sample, YardageBand, YARDS_CEILING, YARDS_FLOOR};
