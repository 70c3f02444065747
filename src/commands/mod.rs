pub mod entropy;
pub mod mutinfo;
