#![allow(dead_code)]

pub mod factory;
