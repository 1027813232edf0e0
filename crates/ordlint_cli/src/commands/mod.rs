pub mod init;
pub mod lint;
