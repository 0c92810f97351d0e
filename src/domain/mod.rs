// Domain layer: models and ports shared by adapters, tools and transports.

pub mod model;
pub mod ports;
