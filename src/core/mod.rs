pub mod logging;

// Name command: argument parsing, race/gender tables, seed selection
pub mod name_gen;
