pub mod coords;
pub mod response;
pub mod space;

// Model crate: wire-shaped domain types only, no transport or rendering.
pub use coords::*;
pub use response::*;
pub use space::*;
