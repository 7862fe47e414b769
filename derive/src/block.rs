use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Expr, ExprPath, Field, Fields, Ident, LitInt, Result, Token,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_block(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`Block` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`Block` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(ItemMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    if fields.is_empty() {
        Err(Error::new_spanned(
            input,
            "`Block` requires at least one item.",
        ))?
    }

    let mut items = Vec::with_capacity(fields.len());
    let mut reads = Vec::with_capacity(fields.len());
    let mut defaults = Vec::with_capacity(fields.len());

    // Running sum of the sizes of the items declared so far.
    let mut previous = 0usize;

    for (index, field) in fields.into_iter().enumerate() {
        let ItemMetadata {
            name,
            number,
            size,
            with,
            default,
        } = field;

        items.push(quote! {
            ::bcbp::block::Item::new(#number, #size, #previous)
        });

        let convert = match with {
            Some(path) => quote! { #path },
            None => quote! { ::bcbp::block::FromField::from_field },
        };

        let default = match default {
            Some(expr) => quote! { ::core::convert::Into::into(#expr) },
            None => quote! { ::core::default::Default::default() },
        };

        reads.push(quote! {
            #name: match r.gated_with(at, gate, &Self::ITEMS[#index], truncation)? {
                ::core::option::Option::Some(text) => #convert(text, &Self::ITEMS[#index])?,
                ::core::option::Option::None => #default,
            }
        });

        defaults.push(quote! { #name: #default });

        previous += size;
    }

    let name = &input.ident;

    let expanded = quote! {
        impl ::bcbp::block::Block for #name {
            const ITEMS: &'static [::bcbp::block::Item] = &[#(#items),*];
            const SIZE: usize = #previous;

            fn read_with(
                r: &::bcbp::reader::Reader<'_>,
                at: usize,
                gate: usize,
                truncation: ::bcbp::reader::Truncation,
            ) -> ::core::result::Result<Self, ::bcbp::Error> {
                ::core::result::Result::Ok(Self {
                    #(#reads),*
                })
            }

            fn absent() -> Self {
                Self {
                    #(#defaults),*
                }
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct ItemMetadata {
    name: Ident,
    number: u16,
    size: usize,
    with: Option<ExprPath>,
    default: Option<Expr>,
}

impl ItemMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("item")) else {
            Err(Error::new_spanned(
                field,
                "Every field of a `Block` must carry an `item` attribute.",
            ))?
        };

        let ItemAttribute {
            number,
            size,
            with,
            default,
        } = attr.meta.require_list()?.parse_args()?;

        let number = number.base10_parse::<u16>()?;

        let Some(size) = size else {
            Err(Error::new_spanned(attr, "Item must declare a `size`."))?
        };

        let size = match size.base10_parse::<usize>()? {
            0 => Err(Error::new_spanned(size, "Item size must be non-zero."))?,
            n => n,
        };

        Ok(Self {
            name,
            number,
            size,
            with,
            default,
        })
    }
}

#[derive(Debug)]
struct ItemAttribute {
    number: LitInt,
    size: Option<LitInt>,
    with: Option<ExprPath>,
    default: Option<Expr>,
}

impl Parse for ItemAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let number = input.parse::<LitInt>()?;

        let mut size = None;
        let mut with = None;
        let mut default = None;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;

            if input.is_empty() {
                break;
            }

            let key = input.parse::<Ident>()?;
            input.parse::<Token![=]>()?;

            if key == "size" {
                size = Some(input.parse::<LitInt>()?);
            } else if key == "with" {
                with = Some(input.parse::<ExprPath>()?);
            } else if key == "default" {
                default = Some(input.parse::<Expr>()?);
            } else {
                Err(Error::new_spanned(
                    key,
                    "Expected one of `size`, `with` or `default`.",
                ))?
            }
        }

        Ok(Self {
            number,
            size,
            with,
            default,
        })
    }
}
