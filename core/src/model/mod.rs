pub mod route;
pub mod stats;
pub mod trip;
