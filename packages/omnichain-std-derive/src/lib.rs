use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Ident};

/// Implements `omnichain_std::interfaces::OwnableInterface` for a contract type.
///
/// The owner must be set in the constructor with `omnichain_std::interfaces::set_owner`.
/// `Env` has to be in scope where the contract type is defined. The derive also imports
/// `OwnableInterface` into that module, so it must not be imported there again.
///
/// # Example
/// ```rust,ignore
/// use omnichain_std::{interfaces, Ownable};
/// use soroban_sdk::{contract, contractimpl, Address, Env};
///
/// #[contract]
/// #[derive(Ownable)]
/// pub struct Contract;
///
/// #[contractimpl]
/// impl Contract {
///     pub fn __constructor(env: &Env, owner: Address) {
///         interfaces::set_owner(env, &owner);
///     }
/// }
/// ```
#[proc_macro_derive(Ownable)]
pub fn derive_ownable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    ownable(&input.ident).into()
}

fn ownable(name: &Ident) -> TokenStream2 {
    quote! {
        use omnichain_std::interfaces::OwnableInterface;

        #[soroban_sdk::contractimpl]
        impl omnichain_std::interfaces::OwnableInterface for #name {
            fn owner(env: &Env) -> soroban_sdk::Address {
                omnichain_std::interfaces::owner(env)
            }

            fn transfer_ownership(env: &Env, new_owner: soroban_sdk::Address) {
                omnichain_std::interfaces::transfer_ownership::<Self>(env, new_owner);
            }
        }
    }
}
