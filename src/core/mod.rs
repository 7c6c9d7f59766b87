// Core server concerns: logging setup and the HTTP host wiring.

pub mod logging;
pub mod server;
