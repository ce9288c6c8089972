pub(crate) mod arrows;
pub(crate) mod image_fill;
pub(crate) mod path;
pub(crate) mod provider;
pub(crate) mod style;
