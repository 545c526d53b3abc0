/// A party money is owed to. The same identifier is used for distribution
/// recipients and for expense payment sources, so a recipient and a payer
/// with equal names are one party.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, serde_derive::Serialize)]
#[serde(transparent)]
pub struct PayableParty(pub(crate) String);

// Shorthand constructor.

pub fn party(name: impl Into<String>) -> PayableParty {
    PayableParty(name.into())
}

impl PayableParty {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PayableParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
