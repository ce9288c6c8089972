pub(crate) mod label;
pub(crate) mod window;
