pub(crate) mod compose;
pub(crate) mod gradient;
pub(crate) mod overlay;
pub(crate) mod plan;
pub(crate) mod skyline;
pub(crate) mod text;
