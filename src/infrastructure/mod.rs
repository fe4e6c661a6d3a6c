// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_device_gateway;
pub mod http_response;
