pub mod carousel;
pub mod inventory;
pub mod outfit;
