// Presentation layer - Command entry points shared by the binaries
pub mod runner;
