mod driver;
mod report;

pub use driver::{is_report_time, Simulation, SimulationBuilder, SimulationSummary};
pub use report::{RecordingReporter, StateReporter, TracingReporter};
