pub mod signup_service;

pub use signup_service::CapacityPolicy;
