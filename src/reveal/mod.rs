pub(crate) mod config;
pub(crate) mod fill;
pub(crate) mod schedule;
pub(crate) mod state;
pub(crate) mod stroke;
