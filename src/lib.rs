//! Attendance Geofencing Library.
//! Handles check-in eligibility and site distance tasks.

#[macro_use]
extern crate log;

pub mod types {
    pub mod eligibility;
    pub mod location;
    pub mod mode;
    pub mod site;
}

pub mod utils {
    pub mod generator;
    pub mod geofence;
    pub mod haversine;
    pub mod registry;
    pub mod sampler;
}

pub use types::eligibility;
pub use types::location;
pub use types::mode;
pub use types::site;
pub use utils::generator;
pub use utils::geofence;
pub use utils::haversine;
pub use utils::registry;
pub use utils::sampler;
