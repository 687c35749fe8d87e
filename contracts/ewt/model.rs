//! Token metadata, fixed limits and the error taxonomy shared by every
//! message of the EcoWaste ledger.

/// Unsigned base-unit amount. Same width as the environment `Balance`.
pub type Amount = u128;

pub type Result<T> = core::result::Result<T, Error>;

pub const TOKEN_NAME: &str = "EcoWaste Token";
pub const TOKEN_SYMBOL: &str = "EWT";
pub const TOKEN_DECIMALS: u8 = 6;
pub const TOKEN_URI: &str = "https://ecowaste.network/metadata/ewt.json";

/// Hard cap on circulating + staked supply, in base units (10^9 EWT).
pub const MAX_SUPPLY: Amount = 1_000_000_000_000_000;

/// Reserved "no account" / burn identifier. Never a valid target.
pub const NULL_ACCOUNT: [u8; 32] = [0u8; 32];

pub const STORAGE_VERSION: u32 = 1;

/// Discriminants double as the stable numeric codes exposed to
/// collaborator contracts; the SCALE encoding of a variant is its code.
#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    NotAuthorized = 100,
    InsufficientBalance = 101,
    InsufficientStake = 102,
    SupplyCapExceeded = 103,
    Paused = 104,
    ZeroAddress = 105,
    InsufficientAllowance = 106,
    InvalidAmount = 107,
    SelfTransfer = 108,
}

impl Error {
    pub fn code(&self) -> u32 {
        *self as u32
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::NotAuthorized => "caller is not the admin",
            Error::InsufficientBalance => "insufficient balance",
            Error::InsufficientStake => "insufficient staked balance",
            Error::SupplyCapExceeded => "supply cap exceeded",
            Error::Paused => "ledger is paused",
            Error::ZeroAddress => "null account is not a valid target",
            Error::InsufficientAllowance => "insufficient allowance",
            Error::InvalidAmount => "amount must be positive",
            Error::SelfTransfer => "sender and recipient are the same account",
        };
        write!(f, "{} ({})", msg, self.code())
    }
}
