pub mod error;
pub mod models;
pub mod session;

pub use error::*;
pub use models::*;
pub use session::*;
