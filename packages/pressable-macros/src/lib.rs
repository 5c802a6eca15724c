use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    braced, parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    spanned::Spanned,
    token::{Brace, Comma, Paren},
    Error, Expr, FieldValue, FnArg, ItemFn, LitStr, Result, ReturnType, Token, Type, TypePath,
};

/// One child inside the braces of an element.
enum ParsedElementChild {
    /// A nested element, e.g. `Text(content: "x")`.
    Element(ParsedElement),
    /// A string literal rendered as text.
    Text(LitStr),
    /// `#(expr)`, an element or an iterator of elements.
    Splice(Expr),
}

impl Parse for ParsedElementChild {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            return input.parse().map(Self::Text);
        }
        if input.peek(Token![#]) {
            input.parse::<Token![#]>()?;
            let inner;
            parenthesized!(inner in input);
            return inner.parse().map(Self::Splice);
        }
        input.parse().map(Self::Element)
    }
}

impl ParsedElementChild {
    /// The value handed to `extend_with_elements` for this child.
    fn source(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Element(element) => element.to_token_stream(),
            Self::Text(text) => quote!([::pressable::AnyElement::from(#text)]),
            Self::Splice(expr) => expr.to_token_stream(),
        }
    }
}

/// An element of the form `MyComponent(my_prop: "foo") { children }`, where both the props
/// and the children are optional.
struct ParsedElement {
    ty: TypePath,
    props: Vec<FieldValue>,
    children: Vec<ParsedElementChild>,
}

fn parse_props(input: ParseStream) -> Result<Vec<FieldValue>> {
    if !input.peek(Paren) {
        return Ok(Vec::new());
    }
    let inner;
    parenthesized!(inner in input);
    let props = Punctuated::<FieldValue, Comma>::parse_terminated(&inner)?;
    Ok(props.into_iter().collect())
}

fn parse_children(input: ParseStream) -> Result<Vec<ParsedElementChild>> {
    let mut children = Vec::new();
    if input.peek(Brace) {
        let inner;
        braced!(inner in input);
        while !inner.is_empty() {
            children.push(inner.parse()?);
        }
    }
    Ok(children)
}

impl Parse for ParsedElement {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            ty: input.parse()?,
            props: parse_props(input)?,
            children: parse_children(input)?,
        })
    }
}

impl ToTokens for ParsedElement {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let ty = &self.ty;
        let members = self.props.iter().map(|prop| &prop.member);
        let values = self.props.iter().map(|prop| &prop.expr);
        let children = self.children.iter().map(ParsedElementChild::source);

        // Unset props fall back to their defaults, so every field of the props struct is
        // optional at the call site.
        tokens.extend(quote! {
            {
                type Props = <#ty as ::pressable::ElementType>::Props;
                #[allow(unused_mut)]
                let mut _pressable_element = ::pressable::Element::<#ty> {
                    key: ::pressable::ElementKey::new(),
                    props: Props {
                        #(#members: (#values).into(),)*
                        ..::core::default::Default::default()
                    },
                };
                #(::pressable::extend_with_elements(&mut _pressable_element.props.children, #children);)*
                _pressable_element
            }
        });
    }
}

/// Creates an element from a component type, its props, and its children.
///
/// Each prop value is converted with `Into`. Children may be nested elements, string literals,
/// or `#(expr)` where `expr` is an element or an iterator of elements.
#[proc_macro]
pub fn element(input: TokenStream) -> TokenStream {
    let element = parse_macro_input!(input as ParsedElement);
    quote!(#element).into()
}

struct ParsedComponent {
    f: ItemFn,
    props_type: Option<Box<Type>>,
}

impl Parse for ParsedComponent {
    fn parse(input: ParseStream) -> Result<Self> {
        let f: ItemFn = input.parse()?;

        if !f.sig.generics.params.is_empty() {
            return Err(Error::new(
                f.sig.generics.span(),
                "components cannot be generic",
            ));
        }

        if let ReturnType::Default = f.sig.output {
            return Err(Error::new(
                f.sig.span(),
                "components must return a value which converts into a `Node`",
            ));
        }

        let mut props_type = None;

        for arg in &f.sig.inputs {
            match arg {
                FnArg::Typed(arg) => {
                    let name = arg.pat.to_token_stream().to_string();
                    match name.as_str() {
                        "props" | "_props" => {
                            if props_type.is_some() {
                                return Err(Error::new(arg.span(), "duplicate `props` argument"));
                            }
                            match &*arg.ty {
                                Type::Reference(r) if r.mutability.is_none() => {
                                    props_type = Some(r.elem.clone());
                                }
                                _ => return Err(Error::new(arg.ty.span(), "invalid `props` type")),
                            }
                        }
                        _ => return Err(Error::new(arg.span(), "invalid argument")),
                    }
                }
                _ => return Err(Error::new(arg.span(), "invalid argument")),
            }
        }

        Ok(Self { f, props_type })
    }
}

impl ToTokens for ParsedComponent {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let attrs = &self.f.attrs;
        let vis = &self.f.vis;
        let name = &self.f.sig.ident;
        let args = &self.f.sig.inputs;
        let block = &self.f.block;
        let output = &self.f.sig.output;

        let props_type_name = self
            .props_type
            .as_ref()
            .map(|ty| quote!(#ty))
            .unwrap_or_else(|| quote!(::pressable::NoProps));

        let impl_args = self.props_type.as_ref().map(|_| quote!(props));

        tokens.extend(quote! {
            #(#attrs)*
            #vis struct #name;

            impl #name {
                fn implementation(#args) #output #block
            }

            impl ::pressable::Component for #name {
                type Props = #props_type_name;

                fn render(props: &Self::Props) -> ::pressable::Node {
                    let _ = props;
                    Self::implementation(#impl_args).into()
                }
            }
        });
    }
}

/// Defines a component from a function.
///
/// The function may take a single `props: &MyProps` argument, and must return something that
/// converts into a `Node`. A unit struct with the function's name is generated which implements
/// `Component`.
#[proc_macro_attribute]
pub fn component(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let component = parse_macro_input!(item as ParsedComponent);
    quote!(#component).into()
}
