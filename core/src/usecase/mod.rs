pub mod dashboard;
mod dashboard_test;
