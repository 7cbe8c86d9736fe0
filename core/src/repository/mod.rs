pub mod file;
pub mod traits;

// Re-export
pub use file::FileTripRepository;
pub use traits::TripRepository;
