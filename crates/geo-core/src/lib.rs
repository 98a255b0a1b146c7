pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod scene;
pub mod session;
pub mod sim;
pub mod sink;
pub mod state;
pub mod telemetry;

pub use backend::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geo::*;
pub use scene::*;
pub use session::*;
pub use sim::*;
pub use sink::*;
pub use state::*;
pub use telemetry::*;
