pub mod restamp_core;
