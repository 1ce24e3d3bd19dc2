//! Client interfaces for the two external collaborators.
//!
//! The ledger never holds locked principal itself: custody (and voting
//! delegation) lives in the deposit module, and the dividend token keeps its
//! own balance ledger. Both are reached through these generated clients.

use soroban_sdk::{contractclient, Address, Env};

/// Custody module holding locked principal on behalf of depositors.
#[contractclient(name = "DepositModuleClient")]
pub trait DepositModule {
    /// Move `amount` of the base asset from `from` into custody.
    fn deposit_into(env: Env, from: Address, amount: i128);

    /// Release `amount` of `from`'s custodied principal to `to`.
    fn withdraw_from(env: Env, from: Address, to: Address, amount: i128);

    /// Delegate the voting power of `from`'s position to `to`.
    ///
    /// Modules without delegation support fail this call.
    fn delegate_voting_power(env: Env, from: Address, to: Address);
}

/// Dividend token ledger. The deposit ledger is the sole minter/burner.
#[contractclient(name = "DividendTokenClient")]
pub trait DividendToken {
    fn mint(env: Env, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
}
