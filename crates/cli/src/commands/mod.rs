pub mod doctor;
pub mod feed;
pub mod init;
