/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the incidence-map
representation. All algorithms are re-exported at the top level of this module, so you
can simply do:
```rust
use mgraphs::algo::*;
```
and gain access to traversal, connectivity, classification, shortest-path and
blocking-set routines. If possible, algorithms are provided as **iterators**, making it
easy to consume results lazily.
*/

mod blocking;
mod classify;
mod connectivity;
mod isomorphism;
mod sequence;
mod shortest_path;
mod traversal;

use crate::prelude::*;

pub use blocking::*;
pub use classify::*;
pub use connectivity::*;
pub use isomorphism::*;
pub use sequence::*;
pub use shortest_path::*;
pub use traversal::*;
