//! Output stage for a finished token stream.
//!
//! Each token becomes one `KIND LEXEME` line. Callers only hand a stream
//! to the emitter once the whole scan succeeded.

pub mod emitter;
