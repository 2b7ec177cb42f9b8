pub mod attraction;
pub mod details;
pub mod food;
pub mod place;
pub mod trip_plan;
pub mod user;
