// Domain layer - Pure models for the key reader log and its chart
pub mod chart;
pub mod event_log;
pub mod key_state;
