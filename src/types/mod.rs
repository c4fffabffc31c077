pub mod device;
pub mod result;
pub mod weights;
