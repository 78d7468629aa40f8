mod code;
mod coord;
mod enums;
mod notam;
mod qualifiers;
mod timestamp;
mod units;

pub use code::*;
pub use coord::*;
pub use enums::*;
pub use notam::*;
pub use qualifiers::*;
pub use timestamp::*;
pub use units::*;
