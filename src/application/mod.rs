// Application layer - Use cases and the device port they depend on
pub mod dashboard_service;
pub mod device_gateway;
pub mod maintenance_service;
