pub mod chain_ext;
pub mod result_ext;
