use std::fmt;

pub type IdValue = i64;

/// Store-assigned identifier of an address record.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(IdValue);

impl Id {
    pub const fn to_inner(self) -> IdValue {
        self.0
    }
}

impl From<IdValue> for Id {
    fn from(from: IdValue) -> Self {
        Self(from)
    }
}

impl From<Id> for IdValue {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
