// Domain layer: arcade records, transform output and the ports the pipelines depend on.

pub mod model;
pub mod ports;
