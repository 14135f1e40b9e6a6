// Domain layer: value types and the ports the host must provide.

pub mod model;
pub mod ports;
