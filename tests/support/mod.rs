#![allow(dead_code)]

pub mod architecture;
pub mod files;
pub mod proposition;
