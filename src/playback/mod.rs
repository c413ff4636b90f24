pub(crate) mod handle;
pub(crate) mod looping;
pub(crate) mod session;
pub(crate) mod trigger;
