// src/config.rs

use crate::error::{IndexError, Result};

pub const MIN_ORDER: usize = 3; // smallest order that still splits into two non-empty leaves
pub const DEFAULT_ORDER: usize = 4; // order used when none is given

/// Shape parameters of a tree, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    order: usize,
}

impl TreeConfig {
    /// Validates `order` (maximum children per internal node).
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(IndexError::InvalidOrder {
                order,
                min: MIN_ORDER,
            });
        }
        Ok(Self { order })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Key capacity shared by leaves and internal nodes.
    pub fn max_keys(&self) -> usize {
        self.order - 1
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_order() {
        for order in 0..MIN_ORDER {
            let err = TreeConfig::new(order).unwrap_err();
            assert!(matches!(err, IndexError::InvalidOrder { order: o, min: MIN_ORDER } if o == order));
        }
    }

    #[test]
    fn test_max_keys_is_order_minus_one() {
        let config = TreeConfig::new(5).expect("order 5 is valid");
        assert_eq!(config.order(), 5);
        assert_eq!(config.max_keys(), 4);
        assert_eq!(TreeConfig::default().max_keys(), DEFAULT_ORDER - 1);
    }
}
