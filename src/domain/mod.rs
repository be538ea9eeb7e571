// Domain layer: identifiers, records and the directory port. No transport details here.

pub mod model;
pub mod ports;
