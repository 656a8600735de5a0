pub mod angle;
pub mod cosmology;
pub mod optics;
pub mod time;

pub use angle::*;
pub use cosmology::*;
pub use optics::*;
pub use time::*;
