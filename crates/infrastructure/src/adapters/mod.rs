//! Port adapters

mod jwt_decoder;
mod reqwest_transport;
mod system_clock;

pub use jwt_decoder::UnverifiedJwtDecoder;
pub use reqwest_transport::ReqwestTransport;
pub use system_clock::SystemClock;
