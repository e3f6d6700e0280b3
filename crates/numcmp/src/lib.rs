#![doc = include_str!("../README.md")]

pub mod base;
pub mod catalog;
pub mod config;
pub mod lifecycle;
pub mod sql;
