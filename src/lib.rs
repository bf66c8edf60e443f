//! Weldtag - weld-spot tagging for Fanuc `.ls` programs
//!
//! Weldtag is a CLI tool and library that copies a tree of Fanuc robot
//! programs, tagging each motion point with the weld-spot number from the
//! comment above it, both in the `/MN` motion lines and in the `/POS`
//! position declarations. Re-running it on its own output changes nothing.
//!
//! ## Module Structure
//!
//! - `annotator`: The two-pass `/MN` + `/POS` tagging of one program
//! - `batch`: Output root handling and parallel processing of many programs
//! - `cli`: Command-line interface layer (commands, prompts, reporting)
//! - `config`: Configuration file loading and parsing
//! - `document`: Byte-exact Latin-1 line storage
//! - `scanner`: Recursive program discovery

pub mod annotator;
pub mod batch;
pub mod cli;
pub mod config;
pub mod document;
pub mod scanner;
