pub mod constants;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod session;
pub mod split;

pub use constants::*;
pub use envelope::*;
pub use error::*;
pub use geometry::*;
pub use motion::*;
pub use session::*;
pub use split::*;
