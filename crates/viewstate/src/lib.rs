pub mod query;
pub mod routes;
pub mod state;

pub use query::*;
pub use routes::*;
pub use state::*;
