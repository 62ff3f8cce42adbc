pub mod budget;
pub mod constants;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod particles;
pub mod plasma;
pub mod spatial;
pub mod surface;

pub use budget::*;
pub use error::*;
pub use input::*;
pub use lifecycle::*;
pub use particles::*;
pub use plasma::*;
pub use spatial::*;
pub use surface::*;
