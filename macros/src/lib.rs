use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, Data, DataStruct, DeriveInput, Fields};

///
/// A derive macro which implements TryFrom<u8> for a fieldless enum.
///
/// Every variant is matched against its discriminant, so enums with explicit
/// discriminants (e.g. `#[repr(u8)] enum Direction { Genesis = 0, Tip = 1 }`)
/// map exactly the bytes they declare. Any other byte is rejected.
///
/// usage:
/// ```ignore
/// #[derive(TryFromByte)]
/// ```
///
#[proc_macro_derive(TryFromByte)]
pub fn try_from_byte(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, data, .. } = parse_macro_input!(input);
    let variants = match data {
        Data::Enum(enum_item) => enum_item.variants,
        _ => panic!("TryFromByte only works on Enums"),
    };
    let arms = variants.iter().map(|variant| {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("TryFromByte only works on fieldless variants");
        }
        let name = &variant.ident;
        quote! {
            x if x == #ident::#name as u8 => Ok(#ident::#name),
        }
    });
    let message = format!("invalid {} value", ident);
    let output = quote! {
        impl std::convert::TryFrom<u8> for #ident {
            type Error = &'static str;
            fn try_from(x: u8) -> Result<Self, Self::Error> {
                match x {
                    #(#arms)*
                    _ => Err(#message),
                }
            }
        }
    };
    output.into()
}

///
/// A derive macro which implements `Serializable` for a struct with named fields.
///
/// The wire layout is the concatenation of each field's encoding in declaration
/// order, with no tags or padding. Reordering the fields of a derived struct
/// changes its wire format.
///
/// Generic structs are supported as long as every field type implements
/// `Serializable` under the struct's own bounds, e.g.
///
/// ```ignore
/// #[derive(Serializable)]
/// pub struct NewRootBlockCommand<C: ChainTypes> {
///     block: C::RootBlock,
/// }
/// ```
///
#[proc_macro_derive(Serializable)]
pub fn serializable(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = parse_macro_input!(input);
    let fields = match data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => fields.named,
        _ => panic!("Serializable only works on structs with named fields"),
    };
    let names: Vec<_> = fields
        .iter()
        .map(|field| field.ident.clone().expect("named field"))
        .collect();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let output = quote! {
        impl #impl_generics crate::serialize::Serializable for #ident #ty_generics #where_clause {
            fn serialize_into(&self, out: &mut Vec<u8>) {
                #(crate::serialize::Serializable::serialize_into(&self.#names, out);)*
            }

            fn deserialize_from(
                reader: &mut crate::serialize::ByteReader<'_>,
            ) -> std::result::Result<Self, crate::error::SerializeError> {
                Ok(Self {
                    #(#names: crate::serialize::Serializable::deserialize_from(reader)?,)*
                })
            }
        }
    };
    output.into()
}
