mod entropy;
mod mutinfo;

pub use entropy::shannon_entropy;
pub use mutinfo::{apply_apc, mutinfo_matrix};
