pub(crate) mod dsl;
pub(crate) mod props;
pub(crate) mod registry;
pub(crate) mod spec;
pub(crate) mod style;
