// Domain layer: request/response models and the transport-facing port.

pub mod model;
pub mod ports;
