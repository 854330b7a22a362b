// Domain layer: records, identifiers and ports. No I/O lives here.

pub mod model;
pub mod ports;
