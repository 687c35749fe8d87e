//! Staged arithmetic for ledger transitions.
//!
//! Every helper here is pure: it takes current store values and returns the
//! values to write, or the error that aborts the message. Messages run all of
//! them before touching storage, so a failed check never leaves a partial write.

use crate::model::{Amount, Error, Result};

pub fn ensure_positive(amount_val: Amount) -> Result<()> {
    if amount_val == 0 {
        return Err(Error::InvalidAmount)
    }
    Ok(())
}

/// Subtract `amount_val` from `held_val`, reporting `short` when it does not
/// cover the amount.
pub fn debit(held_val: Amount, amount_val: Amount, short: Error) -> Result<Amount> {
    held_val.checked_sub(amount_val).ok_or(short)
}

/// Add `amount_val` to `held_val`. Any single holding is bounded by total
/// supply, so overflow can only mean the cap was breached.
pub fn credit(held_val: Amount, amount_val: Amount) -> Result<Amount> {
    held_val.checked_add(amount_val).ok_or(Error::SupplyCapExceeded)
}

pub fn grow_supply(total_val: Amount, amount_val: Amount, cap_val: Amount) -> Result<Amount> {
    let new_total = total_val.checked_add(amount_val).ok_or(Error::SupplyCapExceeded)?;
    if new_total > cap_val {
        return Err(Error::SupplyCapExceeded)
    }
    Ok(new_total)
}

/// Remaining quota after spending `amount_val`; `None` when the quota is
/// exhausted and the entry must be removed.
pub fn consume_allowance(quota_val: Amount, amount_val: Amount) -> Result<Option<Amount>> {
    let left_val = debit(quota_val, amount_val, Error::InsufficientAllowance)?;
    Ok(if left_val == 0 { None } else { Some(left_val) })
}

/// New `(from, to)` holdings for moving `amount_val` between two entries of
/// the same store. When both sides are the same entry the holding is
/// unchanged, but sufficiency is still enforced.
pub fn stage_move(
    from_val: Amount,
    to_val: Amount,
    amount_val: Amount,
    same_entry: bool,
    short: Error,
) -> Result<(Amount, Amount)> {
    let new_from = debit(from_val, amount_val, short)?;
    if same_entry {
        return Ok((from_val, from_val))
    }
    let new_to = credit(to_val, amount_val)?;
    Ok((new_from, new_to))
}
