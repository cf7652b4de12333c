pub mod directory;
pub mod pins;
