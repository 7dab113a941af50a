pub use wcfg_grammar::Error;
