// Domain layer: the form model and the clipboard port. No I/O here.

pub mod model;
pub mod ports;
