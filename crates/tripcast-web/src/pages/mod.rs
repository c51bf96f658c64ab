pub mod form;
pub mod map;
pub mod quick;
