pub(crate) mod jpeg;
