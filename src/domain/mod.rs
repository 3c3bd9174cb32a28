// Domain layer: run models and the output port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
