pub mod go;

pub use go::{scan_file, AliasTable, GoParser, ScannedFunction};
