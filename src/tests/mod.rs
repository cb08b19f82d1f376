pub(crate) mod mocks;
pub(crate) mod utils;
