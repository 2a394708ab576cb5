use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// #[derive(Operand)] generates a call to the declarative macro bridge.
///
/// The override/native selection behind `Operand` only resolves at a concrete
/// type, so generic types are rejected here instead of failing inside the
/// expansion.
pub fn expand_derive_operand(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Operand` can only be derived for concrete types; \
             use `proto_expr::operand!` on each instantiation instead",
        ));
    }

    let ident = &input.ident;
    Ok(quote! {
        ::proto_expr::__impl_operand!(#ident);
    })
}
