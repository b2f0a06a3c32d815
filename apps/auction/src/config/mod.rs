pub mod db;
pub mod roles;
