pub mod category;
pub mod screening;
pub mod student;
