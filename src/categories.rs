//! Bitmask labels for collidable entity classes.
//!
//! Every collidable carries exactly one category bit plus a contact mask
//! naming the categories it must be notified about. The masks are pure
//! labels; [`crate::collision`] turns pairs of them into outcomes.

use std::ops::BitOr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMask(pub u32);

pub const NONE: CategoryMask = CategoryMask(0);
pub const BIRD: CategoryMask = CategoryMask(1 << 0);
pub const PIPE: CategoryMask = CategoryMask(1 << 1);
pub const GAP: CategoryMask = CategoryMask(1 << 2);
pub const GROUND: CategoryMask = CategoryMask(1 << 3);

impl CategoryMask {
    pub fn contains(self, other: CategoryMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// A single-bit mask identifies one entity class.
    pub fn is_single_category(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }
}

impl BitOr for CategoryMask {
    type Output = CategoryMask;

    fn bitor(self, rhs: CategoryMask) -> CategoryMask {
        CategoryMask(self.0 | rhs.0)
    }
}

/// Which categories an entity of `category` must be notified about.
pub fn contact_mask(category: CategoryMask) -> CategoryMask {
    if category == BIRD {
        PIPE | GAP | GROUND
    } else if category == PIPE || category == GAP || category == GROUND {
        BIRD
    } else {
        NONE
    }
}
