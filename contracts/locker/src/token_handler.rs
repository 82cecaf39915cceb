use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Burns `amount` from `sender`. The sender must authorize the burn.
pub fn take_token(env: &Env, token_address: &Address, sender: &Address, amount: i128) {
    TokenClient::new(env, token_address).burn(sender, &amount);
}

/// Mints `amount` to `recipient`. The locker must be the token admin.
pub fn give_token(env: &Env, token_address: &Address, recipient: &Address, amount: i128) {
    StellarAssetClient::new(env, token_address).mint(recipient, &amount);
}
