pub(crate) mod consts;
pub(crate) mod util;
