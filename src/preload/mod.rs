pub(crate) mod loaded;
pub(crate) mod window;
