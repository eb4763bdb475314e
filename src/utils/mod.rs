pub mod colors;
pub mod date;
pub mod path;
pub mod sin;
pub mod table;
