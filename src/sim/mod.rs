//! Headless simulation of complete games.

mod simulation;

pub use simulation::{GameSummary, Simulation, SimulationConfig, SimulationReport};
