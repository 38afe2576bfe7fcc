use anchor_lang::prelude::*;

use crate::{constants::*, errors::SaleError};

/// Set of purchasers allowed to buy from the sale
///
/// Security considerations:
/// - Only `authority` may add or remove members
/// - Members are unique; membership is checked before every purchase
/// - Fixed capacity so the account size never changes after init
#[account]
pub struct WhitelistRecord {
    /// Identity allowed to mutate the member list
    pub authority: Pubkey,              // 32 bytes

    /// Approved purchasers, in insertion order
    pub users: Vec<Pubkey>,             // 4 + (n * 32) bytes

    /// Bump seed for whitelist PDA
    pub bump: u8,                       // 1 byte
}

impl WhitelistRecord {
    /// 8 (discriminator) + 32 (authority) + 4 (vec len) + (100 * 32) + 1 (bump)
    pub const SPACE: usize = 8 + 32 + 4 + (MAX_WHITELIST_USERS * 32) + 1;

    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            users: Vec::new(),
            bump,
        }
    }

    pub fn is_whitelisted(&self, user: &Pubkey) -> bool {
        self.users.contains(user)
    }

    pub fn require_whitelisted(&self, user: &Pubkey) -> Result<()> {
        require!(self.is_whitelisted(user), SaleError::NotWhitelisted);
        Ok(())
    }

    /// Append `user`, rejecting duplicates and a full list
    pub fn add(&mut self, user: Pubkey) -> Result<()> {
        require!(!self.is_whitelisted(&user), SaleError::AlreadyWhitelisted);
        require!(
            self.users.len() < MAX_WHITELIST_USERS,
            SaleError::WhitelistFull
        );
        self.users.push(user);
        Ok(())
    }

    /// Remove `user` if present. Returns whether anything was removed.
    pub fn remove(&mut self, user: &Pubkey) -> bool {
        match self.users.iter().position(|u| u == user) {
            Some(index) => {
                self.users.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Sale configuration and lamport vault
///
/// The account itself holds the lamports collected from purchases on top of
/// its rent-exempt reserve. `balance` tracks purchase proceeds only.
#[account]
pub struct ConfigRecord {
    /// Identity allowed to withdraw collected lamports
    pub owner: Pubkey,                  // 32 bytes

    /// Sale mint PDA
    pub mint: Pubkey,                   // 32 bytes

    /// Lamports charged per base unit of the sale token
    pub price_per_token: u64,           // 8 bytes

    /// Maximum token balance a buyer may hold after a purchase (0 = no limit)
    pub purchase_limit: u64,            // 8 bytes

    /// Purchase proceeds collected since the last withdrawal. Lamports sent
    /// to the account directly are not counted here but are still withdrawable.
    pub balance: u64,                   // 8 bytes

    /// Lamports collected over the lifetime of the sale
    pub total_raised: u64,              // 8 bytes

    /// Base units minted over the lifetime of the sale
    pub total_sold: u64,                // 8 bytes

    /// Bump seed for config PDA
    pub bump: u8,                       // 1 byte

    /// Bump seed for mint PDA (used to sign as mint authority)
    pub mint_bump: u8,                  // 1 byte

    /// Bump seed for whitelist PDA
    pub whitelist_bump: u8,             // 1 byte
}

/// Every number a purchase will write, computed before anything moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchasePlan {
    pub quantity: u64,
    pub cost: u64,
    pub token_balance_after: u64,
    pub vault_balance_after: u64,
    pub total_raised_after: u64,
    pub total_sold_after: u64,
}

impl ConfigRecord {
    /// 8 (discriminator) + 32 (owner) + 32 (mint) + 5 * 8 (amounts) + 3 (bumps)
    pub const SPACE: usize = 8 + 32 + 32 + (5 * 8) + 3;

    /// Lamports due for `quantity` base units
    pub fn quote(&self, quantity: u64) -> Result<u64> {
        quantity
            .checked_mul(self.price_per_token)
            .ok_or_else(|| error!(SaleError::Overflow))
    }

    /// Validate a purchase and compute its effects without mutating anything
    ///
    /// Checks, in order: non-zero quantity, token balance overflow, purchase
    /// limit, price overflow, payer funds, vault counters overflow.
    pub fn plan_purchase(
        &self,
        quantity: u64,
        token_balance: u64,
        payer_lamports: u64,
    ) -> Result<PurchasePlan> {
        require!(quantity > 0, SaleError::ZeroQuantity);

        let token_balance_after = token_balance
            .checked_add(quantity)
            .ok_or(SaleError::Overflow)?;

        if self.purchase_limit > 0 {
            require!(
                token_balance_after <= self.purchase_limit,
                SaleError::PurchaseLimitExceeded
            );
        }

        let cost = self.quote(quantity)?;
        require!(payer_lamports >= cost, SaleError::InsufficientFunds);

        let vault_balance_after = self
            .balance
            .checked_add(cost)
            .ok_or(SaleError::Overflow)?;
        let total_raised_after = self
            .total_raised
            .checked_add(cost)
            .ok_or(SaleError::Overflow)?;
        let total_sold_after = self
            .total_sold
            .checked_add(quantity)
            .ok_or(SaleError::Overflow)?;

        Ok(PurchasePlan {
            quantity,
            cost,
            token_balance_after,
            vault_balance_after,
            total_raised_after,
            total_sold_after,
        })
    }

    pub fn apply_purchase(&mut self, plan: &PurchasePlan) {
        self.balance = plan.vault_balance_after;
        self.total_raised = plan.total_raised_after;
        self.total_sold = plan.total_sold_after;
    }

    /// Split everything above `rent_reserve` into recorded proceeds and
    /// surplus, then reset `balance`
    pub fn settle_withdrawal(&mut self, vault_lamports: u64, rent_reserve: u64) -> Withdrawal {
        let amount = withdrawable_lamports(vault_lamports, rent_reserve);
        let from_purchases = self.balance.min(amount);
        self.balance = 0;

        Withdrawal {
            amount,
            from_purchases,
            surplus: amount - from_purchases,
        }
    }
}

/// Lamports leaving the vault in one withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub amount: u64,
    /// Part of `amount` that came from recorded purchases
    pub from_purchases: u64,
    /// Lamports that reached the vault outside of purchases
    pub surplus: u64,
}

/// Lamports that can leave the vault while keeping it rent exempt
pub fn withdrawable_lamports(vault_lamports: u64, rent_reserve: u64) -> u64 {
    vault_lamports.saturating_sub(rent_reserve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_config(price_per_token: u64, purchase_limit: u64, balance: u64) -> ConfigRecord {
        ConfigRecord {
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            price_per_token,
            purchase_limit,
            balance,
            total_raised: balance,
            total_sold: 0,
            bump: 0,
            mint_bump: 0,
            whitelist_bump: 0,
        }
    }

    #[test]
    fn test_quote_reference_price() {
        let config = mock_config(2, 100, 0);
        assert_eq!(config.quote(10).unwrap(), 20);
    }

    #[test]
    fn test_plan_purchase_updates() {
        let config = mock_config(2, 100, 6);
        let plan = config.plan_purchase(10, 5, 1_000).unwrap();

        assert_eq!(plan.cost, 20);
        assert_eq!(plan.token_balance_after, 15);
        assert_eq!(plan.vault_balance_after, 26);
        assert_eq!(plan.total_raised_after, 26);
        assert_eq!(plan.total_sold_after, 10);
    }

    #[test]
    fn test_plan_purchase_exact_limit() {
        let config = mock_config(2, 100, 0);
        assert!(config.plan_purchase(40, 60, u64::MAX).is_ok());
        assert!(config.plan_purchase(41, 60, u64::MAX).is_err());
    }

    #[test]
    fn test_plan_purchase_no_limit() {
        let config = mock_config(1, 0, 0);
        assert!(config.plan_purchase(1_000_000, 0, u64::MAX).is_ok());
    }

    #[test]
    fn test_apply_purchase_then_withdraw() {
        let mut config = mock_config(2, 0, 0);
        let plan = config.plan_purchase(10, 0, 20).unwrap();
        config.apply_purchase(&plan);
        assert_eq!(config.balance, 20);

        let withdrawal = config.settle_withdrawal(1_000 + 20, 1_000);
        assert_eq!(withdrawal.amount, 20);
        assert_eq!(withdrawal.surplus, 0);
        assert_eq!(config.balance, 0);
        assert_eq!(config.total_raised, 20);
    }

    #[test]
    fn test_whitelist_add_remove() {
        let mut whitelist = WhitelistRecord::new(Pubkey::new_unique(), 255);
        let user = Pubkey::new_unique();

        whitelist.add(user).unwrap();
        assert!(whitelist.is_whitelisted(&user));
        assert!(whitelist.remove(&user));
        assert!(!whitelist.is_whitelisted(&user));
        assert!(!whitelist.remove(&user));
    }

    #[test]
    fn test_withdrawable_never_underflows() {
        assert_eq!(withdrawable_lamports(100, 40), 60);
        assert_eq!(withdrawable_lamports(40, 40), 0);
        assert_eq!(withdrawable_lamports(10, 40), 0);
    }
}
