pub mod constants;
pub mod frame;
pub mod input;
pub mod particle;
pub mod raster;
pub mod sim;
pub mod spatial;
pub mod surface;
pub mod swarm;

pub use constants::*;
pub use frame::*;
pub use input::*;
pub use particle::*;
pub use raster::*;
pub use sim::*;
pub use spatial::*;
pub use surface::*;
pub use swarm::*;
