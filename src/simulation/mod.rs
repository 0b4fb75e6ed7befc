pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod rest;
pub mod scenario;
pub mod states;
