pub(crate) mod counter;
