// Domain layer: address model and the ports map providers and country tables plug into.

pub mod model;
pub mod ports;
