#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod logic;
pub mod model;

#[ink::contract]
mod ewt {
    use crate::logic;
    use crate::model::{
        Error, Result, MAX_SUPPLY, NULL_ACCOUNT, STORAGE_VERSION, TOKEN_DECIMALS, TOKEN_NAME,
        TOKEN_SYMBOL, TOKEN_URI,
    };
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    #[ink(event)]
    pub struct AdminTransferred {
        #[ink(topic)]
        new_admin_acc: AccountId,
    }

    #[ink(event)]
    pub struct PauseStatusChanged {
        paused_flag: bool,
    }

    #[ink(event)]
    pub struct Minted {
        #[ink(topic)]
        recipient_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Burned {
        #[ink(topic)]
        burner_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Transferred {
        #[ink(topic)]
        sender_acc: AccountId,
        #[ink(topic)]
        recipient_acc: AccountId,
        amount_val: Balance,
        memo: Option<Vec<u8>>,
    }

    #[ink(event)]
    pub struct Approved {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct TransferredFrom {
        #[ink(topic)]
        owner_acc: AccountId,
        #[ink(topic)]
        spender_acc: AccountId,
        #[ink(topic)]
        recipient_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Staked {
        #[ink(topic)]
        staker_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(event)]
    pub struct Unstaked {
        #[ink(topic)]
        unstaker_acc: AccountId,
        amount_val: Balance,
    }

    #[ink(storage)]
    pub struct EcoWasteToken {
        // access control
        admin_acc: AccountId,
        paused_flag: bool,

        // supply
        total_supply: Balance,

        // stores; absent key reads as zero
        balances: Mapping<AccountId, Balance>,
        staked: Mapping<AccountId, Balance>,
        /// (owner_acc, spender_acc) -> remaining quota. Exhausted entries are removed.
        allowances: Mapping<(AccountId, AccountId), Balance>,

        storage_ver_u32: u32,
    }

    impl EcoWasteToken {
        // -------- constructors --------

        /// Deployer becomes admin; ledger starts unpaused with zero supply.
        #[ink(constructor)]
        pub fn new() -> Self {
            Self {
                admin_acc: Self::env().caller(),
                paused_flag: false,
                total_supply: 0,
                balances: Mapping::default(),
                staked: Mapping::default(),
                allowances: Mapping::default(),
                storage_ver_u32: STORAGE_VERSION,
            }
        }

        // -------- modifiers (helpers) --------

        fn only_admin(&self) -> Result<()> {
            if !self.is_admin(self.env().caller()) {
                return Err(Error::NotAuthorized)
            }
            Ok(())
        }

        fn when_not_paused(&self) -> Result<()> {
            if self.paused_flag {
                return Err(Error::Paused)
            }
            Ok(())
        }

        fn ensure_not_null(target_acc: AccountId) -> Result<()> {
            if target_acc == AccountId::from(NULL_ACCOUNT) {
                return Err(Error::ZeroAddress)
            }
            Ok(())
        }

        // -------- admin / access control --------

        #[ink(message)]
        pub fn transfer_admin(&mut self, new_admin_acc: AccountId) -> Result<bool> {
            self.only_admin()?;
            if new_admin_acc == self.env().caller() {
                return Err(Error::SelfTransfer)
            }
            Self::ensure_not_null(new_admin_acc)?;

            self.admin_acc = new_admin_acc;
            ink::env::debug_println!("ewt: admin handed over to {:?}", new_admin_acc);
            self.env().emit_event(AdminTransferred { new_admin_acc });
            Ok(true)
        }

        /// Sets the flag unconditionally; returns the new value.
        #[ink(message)]
        pub fn set_paused(&mut self, paused_flag: bool) -> Result<bool> {
            self.only_admin()?;
            self.paused_flag = paused_flag;
            ink::env::debug_println!("ewt: paused = {}", paused_flag);
            self.env().emit_event(PauseStatusChanged { paused_flag });
            Ok(paused_flag)
        }

        // -------- supply --------

        /// Admin-only issuance. Not gated by the pause flag, so supply can
        /// still be managed while transfers are halted.
        #[ink(message)]
        pub fn mint(&mut self, recipient_acc: AccountId, amount_val: Balance) -> Result<bool> {
            self.only_admin()?;
            logic::ensure_positive(amount_val)?;
            Self::ensure_not_null(recipient_acc)?;
            let new_total = logic::grow_supply(self.total_supply, amount_val, MAX_SUPPLY)?;
            let new_bal = logic::credit(self.get_balance(recipient_acc), amount_val)?;

            self.total_supply = new_total;
            self.balances.insert(recipient_acc, &new_bal);
            self.env().emit_event(Minted { recipient_acc, amount_val });
            Ok(true)
        }

        #[ink(message)]
        pub fn burn(&mut self, amount_val: Balance) -> Result<bool> {
            self.when_not_paused()?;
            logic::ensure_positive(amount_val)?;
            let burner_acc = self.env().caller();
            let new_bal =
                logic::debit(self.get_balance(burner_acc), amount_val, Error::InsufficientBalance)?;
            // balance <= total always, so this cannot fail once the debit passed
            let new_total = self.total_supply.saturating_sub(amount_val);

            self.balances.insert(burner_acc, &new_bal);
            self.total_supply = new_total;
            self.env().emit_event(Burned { burner_acc, amount_val });
            Ok(true)
        }

        // -------- transfers / allowances --------

        #[ink(message)]
        pub fn transfer(
            &mut self,
            recipient_acc: AccountId,
            amount_val: Balance,
            memo: Option<Vec<u8>>,
        ) -> Result<bool> {
            self.when_not_paused()?;
            logic::ensure_positive(amount_val)?;
            let sender_acc = self.env().caller();
            if recipient_acc == sender_acc {
                return Err(Error::SelfTransfer)
            }
            Self::ensure_not_null(recipient_acc)?;
            let (new_from, new_to) = logic::stage_move(
                self.get_balance(sender_acc),
                self.get_balance(recipient_acc),
                amount_val,
                false,
                Error::InsufficientBalance,
            )?;

            self.balances.insert(sender_acc, &new_from);
            self.balances.insert(recipient_acc, &new_to);
            self.env().emit_event(Transferred { sender_acc, recipient_acc, amount_val, memo });
            Ok(true)
        }

        /// Overwrites the quota; it is not added to an existing one.
        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<bool> {
            self.when_not_paused()?;
            logic::ensure_positive(amount_val)?;
            Self::ensure_not_null(spender_acc)?;
            let owner_acc = self.env().caller();

            self.allowances.insert((owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approved { owner_acc, spender_acc, amount_val });
            Ok(true)
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            owner_acc: AccountId,
            recipient_acc: AccountId,
            amount_val: Balance,
        ) -> Result<bool> {
            self.when_not_paused()?;
            logic::ensure_positive(amount_val)?;
            Self::ensure_not_null(recipient_acc)?;
            let spender_acc = self.env().caller();
            let left_quota =
                logic::consume_allowance(self.get_allowance(owner_acc, spender_acc), amount_val)?;
            let (new_from, new_to) = logic::stage_move(
                self.get_balance(owner_acc),
                self.get_balance(recipient_acc),
                amount_val,
                owner_acc == recipient_acc,
                Error::InsufficientBalance,
            )?;

            match left_quota {
                Some(quota_val) => {
                    self.allowances.insert((owner_acc, spender_acc), &quota_val);
                }
                None => self.allowances.remove((owner_acc, spender_acc)),
            }
            self.balances.insert(owner_acc, &new_from);
            self.balances.insert(recipient_acc, &new_to);
            self.env().emit_event(TransferredFrom { owner_acc, spender_acc, recipient_acc, amount_val });
            Ok(true)
        }

        // -------- staking --------

        #[ink(message)]
        pub fn stake(&mut self, amount_val: Balance) -> Result<bool> {
            self.when_not_paused()?;
            logic::ensure_positive(amount_val)?;
            let staker_acc = self.env().caller();
            let new_bal =
                logic::debit(self.get_balance(staker_acc), amount_val, Error::InsufficientBalance)?;
            let new_stake = logic::credit(self.get_staked_balance(staker_acc), amount_val)?;

            self.balances.insert(staker_acc, &new_bal);
            self.staked.insert(staker_acc, &new_stake);
            self.env().emit_event(Staked { staker_acc, amount_val });
            Ok(true)
        }

        #[ink(message)]
        pub fn unstake(&mut self, amount_val: Balance) -> Result<bool> {
            self.when_not_paused()?;
            logic::ensure_positive(amount_val)?;
            let unstaker_acc = self.env().caller();
            let new_stake = logic::debit(
                self.get_staked_balance(unstaker_acc),
                amount_val,
                Error::InsufficientStake,
            )?;
            let new_bal = logic::credit(self.get_balance(unstaker_acc), amount_val)?;

            self.staked.insert(unstaker_acc, &new_stake);
            self.balances.insert(unstaker_acc, &new_bal);
            self.env().emit_event(Unstaked { unstaker_acc, amount_val });
            Ok(true)
        }

        // -------- read API --------

        #[ink(message)]
        pub fn get_balance(&self, account_acc: AccountId) -> Balance {
            self.balances.get(account_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn get_staked_balance(&self, account_acc: AccountId) -> Balance {
            self.staked.get(account_acc).unwrap_or(0)
        }

        /// Spendable plus staked; the governance module's voting weight basis.
        #[ink(message)]
        pub fn get_effective_balance(&self, account_acc: AccountId) -> Balance {
            self.get_balance(account_acc)
                .saturating_add(self.get_staked_balance(account_acc))
        }

        #[ink(message)]
        pub fn my_balance(&self) -> Balance {
            self.get_balance(self.env().caller())
        }

        #[ink(message)]
        pub fn my_staked_balance(&self) -> Balance {
            self.get_staked_balance(self.env().caller())
        }

        #[ink(message)]
        pub fn get_allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get((owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn get_total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn max_supply(&self) -> Balance {
            MAX_SUPPLY
        }

        #[ink(message)]
        pub fn get_admin(&self) -> AccountId {
            self.admin_acc
        }

        #[ink(message)]
        pub fn is_admin(&self, account_acc: AccountId) -> bool {
            account_acc == self.admin_acc
        }

        #[ink(message)]
        pub fn is_paused(&self) -> bool {
            self.paused_flag
        }

        #[ink(message)]
        pub fn name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        #[ink(message)]
        pub fn token_uri(&self) -> String {
            String::from(TOKEN_URI)
        }

        #[ink(message)]
        pub fn storage_version(&self) -> u32 {
            self.storage_ver_u32
        }
    }


}
