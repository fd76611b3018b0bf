pub mod attendance;
pub mod upload;
