// Domain layer: argument model, request descriptor and the config port.

pub mod model;
pub mod ports;
pub mod request;
