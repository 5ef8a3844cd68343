pub(crate) mod model;
pub(crate) mod select;
pub(crate) mod srt;
