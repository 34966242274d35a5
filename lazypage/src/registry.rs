#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::PageId;

#[cfg(feature = "std")]
pub(crate) type PageSet = HashSet<PageId>;
#[cfg(not(feature = "std"))]
pub(crate) type PageSet = BTreeSet<PageId>;
