pub mod gateway;
pub mod lenient;

pub use gateway::GatewayErrorBody;
