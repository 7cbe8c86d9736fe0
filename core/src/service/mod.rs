pub mod aggregate;
pub mod dto;
pub mod route;
pub mod trip_service;
pub mod view;
