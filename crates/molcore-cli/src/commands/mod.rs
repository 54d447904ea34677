pub mod angle;
pub mod constants;
pub mod convert;
pub mod element;
