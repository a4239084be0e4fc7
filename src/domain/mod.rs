// Domain layer: models, the response shape, and ports (interfaces).
// No IO here; implementations live in core/.

pub mod color;
pub mod model;
pub mod ports;
pub mod response;
