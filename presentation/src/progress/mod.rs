//! Progress display while the gateway is busy

pub mod spinner;
