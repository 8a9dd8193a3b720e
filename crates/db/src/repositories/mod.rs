//! Repository structs, one per table. Each exposes async associated
//! functions taking the pool explicitly.

pub mod account_repo;
pub mod dress_repo;
pub mod measurement_repo;
pub mod session_repo;
pub mod tailor_repo;

pub use account_repo::AccountRepo;
pub use dress_repo::DressRepo;
pub use measurement_repo::MeasurementRepo;
pub use session_repo::SessionRepo;
pub use tailor_repo::TailorRepo;
