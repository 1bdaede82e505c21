// Domain layer: entities, the closed action set and the capability ports.

pub mod model;
pub mod ports;
