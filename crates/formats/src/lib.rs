pub mod export;
pub mod feature;

pub use export::*;
pub use feature::*;
