pub mod progress;
pub mod scope;
pub mod shared;
pub mod voice;
