use proc_macro::TokenStream;
use quote::ToTokens;
use syn::{Data, DeriveInput, Fields, FieldsNamed, FieldsUnnamed};

pub fn expand(item: TokenStream) -> TokenStream {
    let mut derive_input = syn::parse_macro_input!(item as DeriveInput);
    let enum_ident = derive_input.ident.clone();
    let enum_attributes = derive_input.attrs.clone();
    let enum_visibility = derive_input.vis.clone();
    let Data::Enum(data_enum) = &mut derive_input.data else {
        return derive_input.into_token_stream().into();
    };
    let mut items = std::vec![];

    for variant in &mut data_enum.variants {
        let Fields::Named(_fields_named) = &variant.fields else {
            continue;
        };
        let variant_ident = variant.ident.clone();

        // NOTE: the replacement tuple fields are parsed from tokens so the spans come from the call site
        let fields_unnamed = match syn::parse2::<FieldsUnnamed>(quote::quote! { (#variant_ident) }) {
            Ok(fields_unnamed) => fields_unnamed,
            Err(error) => return error.to_compile_error().into(),
        };
        let Fields::Named(mut fields_named) = std::mem::replace(&mut variant.fields, Fields::Unnamed(fields_unnamed))
        else {
            continue;
        };

        publish_fields(&mut fields_named, &enum_visibility);

        items.push(quote::quote! {
            #(#enum_attributes)*
            #enum_visibility struct #variant_ident #fields_named

            impl ::std::convert::From<#variant_ident> for #enum_ident {
                fn from(value: #variant_ident) -> Self {
                    Self::#variant_ident(value)
                }
            }
        });
    }

    quote::quote! {
        #(#items)*
        #derive_input
    }
    .into()
}

fn publish_fields(fields_named: &mut FieldsNamed, visibility: &syn::Visibility) {
    for field in &mut fields_named.named {
        field.vis = visibility.clone();
    }
}
