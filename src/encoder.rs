pub mod impl_file;
pub mod interface;
