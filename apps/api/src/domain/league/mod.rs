// League domain module

#![allow(clippy::module_inception)]

pub mod league;

pub use league::League;
