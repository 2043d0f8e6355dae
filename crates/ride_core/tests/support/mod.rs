#![allow(dead_code)]

pub mod platform;
