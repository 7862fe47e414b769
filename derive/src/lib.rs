use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod block;

#[proc_macro_derive(Block, attributes(item))]
pub fn derive_block(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match block::expand_block(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
