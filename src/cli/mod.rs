pub mod doctor;
pub mod exec;
