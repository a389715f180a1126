pub(crate) mod enumerate;
pub(crate) mod transform;
pub(crate) mod zip;
