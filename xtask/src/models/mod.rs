pub mod args;
pub mod keyset;
