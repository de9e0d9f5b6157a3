// Domain layer: user record model and the ports (traits) the pipeline is built on.

pub mod model;
pub mod ports;
