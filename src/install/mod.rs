pub mod dir;
pub mod executable;
pub mod installer;
pub mod path;
