//! Catalog of symbol tags offered by the toolbox.
//!
//! Sessions store symbol types as opaque strings and return them verbatim;
//! [`SymbolKind`] only names the tags a ladder toolbox usually offers.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Examine if closed (normally open contact)
    Xic,
    /// Examine if open (normally closed contact)
    Xio,
    /// Output energize coil
    Ote,
    /// Output latch coil
    Otl,
    /// Output unlatch coil
    Otu,
    /// Timer on delay
    Ton,
    Rect,
    Tri,
    Circ,
}

impl SymbolKind {
    /// Ladder symbols in toolbox order.
    pub const LADDER: [SymbolKind; 6] = [
        SymbolKind::Xic,
        SymbolKind::Xio,
        SymbolKind::Ote,
        SymbolKind::Otl,
        SymbolKind::Otu,
        SymbolKind::Ton,
    ];

    /// Generic shape tags used by the list-based prototype.
    pub const SHAPES: [SymbolKind; 3] = [SymbolKind::Rect, SymbolKind::Tri, SymbolKind::Circ];

    /// Tag stored in the session, e.g. `"XIC"`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Xic => "XIC",
            Self::Xio => "XIO",
            Self::Ote => "OTE",
            Self::Otl => "OTL",
            Self::Otu => "OTU",
            Self::Ton => "TON",
            Self::Rect => "RECT",
            Self::Tri => "TRI",
            Self::Circ => "CIRC",
        }
    }

    /// Button caption for the toolbox.
    pub fn label(self) -> &'static str {
        match self {
            Self::Xic => "XIC (NO)",
            Self::Xio => "XIO (NC)",
            Self::Ote => "OTE (Coil)",
            Self::Otl => "OTL (Latch)",
            Self::Otu => "OTU (Unlatch)",
            Self::Ton => "TON (Timer)",
            Self::Rect => "Rectangle",
            Self::Tri => "Triangle",
            Self::Circ => "Circle",
        }
    }

    /// Contacts sit on the left of a rung, coils and timers on the right.
    pub fn is_contact(self) -> bool {
        matches!(self, Self::Xic | Self::Xio)
    }

    pub fn is_output(self) -> bool {
        matches!(self, Self::Ote | Self::Otl | Self::Otu | Self::Ton)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tag that does not belong to the built-in catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown symbol tag {:?}", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl FromStr for SymbolKind {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolKind::LADDER
            .into_iter()
            .chain(SymbolKind::SHAPES)
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownSymbol(s.to_owned()))
    }
}

impl From<SymbolKind> for String {
    fn from(kind: SymbolKind) -> Self {
        kind.tag().to_owned()
    }
}
