pub mod configuration;
pub mod output;
pub mod simulation;

pub use simulation::engine::Engine;
pub use simulation::error::SimError;
pub use simulation::forces::acceleration;
pub use simulation::integrator::{integrate, Method, MAX_STEPS};
pub use simulation::params::Parameters;
pub use simulation::rest::{is_at_rest, REST_TOLERANCE};
pub use simulation::scenario::Scenario;
pub use simulation::states::{State, Trajectory};

pub use configuration::config::{EngineConfig, MethodConfig, ParametersConfig, ScenarioConfig};

pub use output::gnuplot::{line_plot_script, run_gnuplot};
pub use output::writer::{format_dat, write_dat};
