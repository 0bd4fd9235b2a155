//! Opt-in expansion tracing.
//!
//! Set `TYPELIT_TRACE_EXPANSION` in the environment of the compiler and each
//! literal macro prints what it received and what it produced to stderr.
//! Cargo shows this output for the crate being built.

use proc_macro2::TokenStream;

/// Environment variable that turns tracing on. Any value works.
pub const TRACE_ENV: &str = "TYPELIT_TRACE_EXPANSION";

pub fn enabled() -> bool {
    std::env::var_os(TRACE_ENV).is_some()
}

/// Report one expansion, or its failure.
pub fn expansion(name: &str, input: &TokenStream, output: &syn::Result<TokenStream>) {
    if !enabled() {
        return;
    }
    match output {
        Ok(tokens) => eprintln!("typelit: {}!({}) => {}", name, input, tokens),
        Err(err) => eprintln!("typelit: {}!({}) failed: {}", name, input, err),
    }
}
