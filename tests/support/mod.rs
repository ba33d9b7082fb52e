#![allow(dead_code)]

pub mod item_api;
pub mod workspace;
