pub mod states;
pub mod params;
pub mod events;
pub mod forces;
pub mod fuel;
pub mod integrator;
pub mod scenario;
pub mod engine;
