mod import;
mod stock;

pub use import::*;
pub use stock::*;
