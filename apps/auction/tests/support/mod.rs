#![allow(dead_code)]

pub mod fixtures;
pub mod platform;
pub mod stores;
