pub(crate) mod controller;
pub(crate) mod frame;
pub(crate) mod observer;
pub(crate) mod scheduler;
pub(crate) mod timing;
