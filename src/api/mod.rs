mod binding_controller;
mod builder;
mod builder_accessors;
mod builder_config;
mod builder_init;
mod call_controller;
mod initial_parameters;
mod render_coordinator;

pub use builder::{BASE_URL_KEY, ChartBuilder};
pub use builder_config::ChartBuilderConfig;
pub use initial_parameters::InitialParameters;
