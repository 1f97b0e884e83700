use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, ItemFn};

/// Marks a synchronous operator test.
///
/// Expands to `#[test]` on native targets and to `wasm_bindgen_test` on
/// wasm32. Every operator in rxext delivers its notifications synchronously,
/// so async test bodies and runtime flavors are rejected.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as ItemFn);

  let raw_args = proc_macro2::TokenStream::from(attr);
  if !raw_args.is_empty() {
    return TokenStream::from(
      syn::Error::new(
        raw_args.span(),
        "rxext_macro::test takes no arguments. Use #[rxext_macro::test].",
      )
      .to_compile_error(),
    );
  }

  if let Some(asyncness) = input.sig.asyncness {
    return TokenStream::from(
      syn::Error::new(
        asyncness.span(),
        "rxext_macro::test only supports synchronous tests; rxext operators never \
         suspend, so drop the `async` keyword.",
      )
      .to_compile_error(),
    );
  }

  let expanded = quote! {
      #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
      #[cfg_attr(not(target_arch = "wasm32"), test)]
      #input
  };

  TokenStream::from(expanded)
}
