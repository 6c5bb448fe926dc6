// Domain layer: the pure evaluation core. No IO, no shared state.

pub mod error;
pub mod ir;
pub mod metrics;
pub mod paths;
