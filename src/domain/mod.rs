// Domain layer: article model, pricing rules and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod pricing;
pub mod rules;
