mod area;
mod position;

pub use area::*;
pub use position::Position;
