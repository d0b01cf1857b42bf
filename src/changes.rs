/*!
Enum defining what can make a mesh out of date
*/

use flagset::{flags, FlagSet};

flags! {
    /**
    Something a [crate::assembler::MeshAssembler] mesh depends on, and which changed since it was built
    */
    #[allow(missing_docs)]
    pub enum Change: u8 {
        Sources,
        CellSize,
        Threshold,
        Mode,
        Policy,
    }
}

/** A set of several [Change]
Check the `flagset` crate for more details if needed.
```
# use metaball_mesh::changes::{*, Change::*};
let nothing = no_change();
assert!(nothing.is_empty());

let mut changes = no_change();
changes |= Change::Sources;
changes |= Change::Threshold;

assert!(changes.contains(Change::Sources));
assert!(!changes.contains(Change::Mode));
```
*/
pub type Changes = FlagSet<Change>;

/// Empty set of changes
pub fn no_change() -> Changes {
    FlagSet::<Change>::default()
}

/// Every possible change
pub fn all_changes() -> Changes {
    FlagSet::<Change>::full()
}
