// Filesystem Families Organization

pub mod s5;
