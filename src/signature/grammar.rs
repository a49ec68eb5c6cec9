//! Static table of Solidity argument types accepted in a signature.

/// Width constraint for a parameterized base type such as `uint256`.
///
/// A width is valid when `min < width <= max` and `width % step == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBound {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl TypeBound {
    /// Returns true if `width` satisfies this bound.
    #[inline]
    pub fn accepts(&self, width: u32) -> bool {
        width > self.min && width <= self.max && width % self.step == 0
    }
}

/// A known base type and its optional width bound.
///
/// `bound == None` means the type is fixed and takes no numeric suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseType {
    pub name: &'static str,
    pub bound: Option<TypeBound>,
}

const INT_BOUND: TypeBound = TypeBound {
    min: 1,
    max: 256,
    step: 8,
};

// Solidity's fixed byte arrays start at bytes1, so min is 0 rather than 1.
const BYTES_BOUND: TypeBound = TypeBound {
    min: 0,
    max: 32,
    step: 1,
};

/// Every base type the validator recognizes.
pub const BASE_TYPES: &[BaseType] = &[
    BaseType {
        name: "uint",
        bound: Some(INT_BOUND),
    },
    BaseType {
        name: "int",
        bound: Some(INT_BOUND),
    },
    BaseType {
        name: "bytes",
        bound: Some(BYTES_BOUND),
    },
    BaseType {
        name: "address",
        bound: None,
    },
    BaseType {
        name: "string",
        bound: None,
    },
    BaseType {
        name: "bool",
        bound: None,
    },
];

/// Looks up a base type by its exact name.
pub fn lookup(name: &str) -> Option<&'static BaseType> {
    BASE_TYPES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(lookup("uint").and_then(|t| t.bound), Some(INT_BOUND));
        assert!(lookup("address").unwrap().bound.is_none());
        assert!(lookup("uint256").is_none());
        assert!(lookup("float").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_int_bound() {
        assert!(INT_BOUND.accepts(8));
        assert!(INT_BOUND.accepts(256));
        assert!(!INT_BOUND.accepts(0));
        assert!(!INT_BOUND.accepts(7));
        assert!(!INT_BOUND.accepts(264));
    }

    #[test]
    fn test_bytes_bound() {
        assert!(BYTES_BOUND.accepts(1));
        assert!(BYTES_BOUND.accepts(32));
        assert!(!BYTES_BOUND.accepts(0));
        assert!(!BYTES_BOUND.accepts(33));
    }
}
