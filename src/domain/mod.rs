// Domain layer: core models and ports. Adapters implement the ports; core only depends on them.

pub mod model;
pub mod ports;
