pub mod states;
pub mod params;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod trajectory;
pub mod tail;
pub mod clock;
pub mod scenario;
