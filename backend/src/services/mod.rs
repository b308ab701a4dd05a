pub mod books;
pub mod uploads;
