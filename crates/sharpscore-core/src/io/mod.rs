pub mod discovery;
pub mod image_io;
pub mod table;
