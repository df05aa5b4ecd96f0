use std::fmt;

/// Purpose level of a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purpose(pub u32);

impl Purpose {
    /// BIP-44 purpose (44')
    pub const BIP44: Purpose = Purpose(44);

    /// Create a new purpose
    pub fn new(value: u32) -> Self {
        Purpose(value)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}

/// Registered coin type of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinType(pub u32);

impl CoinType {
    /// Ethereum (60')
    pub const ETHEREUM: CoinType = CoinType(60);
    /// Solana (501')
    pub const SOLANA: CoinType = CoinType(501);

    /// Create a new coin type
    pub fn new(value: u32) -> Self {
        CoinType(value)
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}

/// Account level of a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountIndex(pub u32);

impl AccountIndex {
    /// Create a new account index
    pub fn new(value: u32) -> Self {
        AccountIndex(value)
    }
}

impl fmt::Display for AccountIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}

/// Change level of a derivation path (0 is the external chain)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change(pub u32);

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address index of a derivation path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressIndex(pub u32);

impl fmt::Display for AddressIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported chains.
///
/// The set is closed; chain-specific behavior is dispatched by matching
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    Ethereum,
    Solana,
}

impl Chain {
    /// Registered coin type for this chain
    pub fn coin_type(&self) -> CoinType {
        match self {
            Chain::Ethereum => CoinType::ETHEREUM,
            Chain::Solana => CoinType::SOLANA,
        }
    }

    /// Lowercase label, used as the salt context tag
    pub fn label(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Solana => "solana",
        }
    }

    /// Standard derivation path for an account on this chain
    pub fn derivation_path(&self, account: u32) -> DerivationPath {
        DerivationPath::standard(self.coin_type(), AccountIndex::new(account))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derivation path shaped as
/// m / purpose' / coin_type' / account' / change / address_index
///
/// Paths are built per derivation and rendered into the seed; they are
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    /// Purpose (hardened)
    pub purpose: Purpose,
    /// Coin type (hardened)
    pub coin_type: CoinType,
    /// Account (hardened)
    pub account: AccountIndex,
    /// Change (0 for external)
    pub change: Change,
    /// Address index
    pub address_index: AddressIndex,
}

impl DerivationPath {
    /// Create a standard path (m/44'/coin_type'/account'/0/0)
    pub fn standard(coin_type: CoinType, account: AccountIndex) -> Self {
        DerivationPath {
            purpose: Purpose::BIP44,
            coin_type,
            account,
            change: Change(0),
            address_index: AddressIndex(0),
        }
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "m/{}/{}/{}/{}/{}",
            self.purpose, self.coin_type, self.account, self.change, self.address_index
        )
    }
}
