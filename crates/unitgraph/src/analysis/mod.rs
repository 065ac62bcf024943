//! Graph analysis: root selection, spanning trees and weighted shortest paths.
//!
//! All operations are synchronous, read their graph by shared reference and
//! keep their working state (visited sets, tentative distances) local to the
//! call, so any number of queries can run against the same graph.
//!
//! ```
//! use unitgraph::analysis::{self, TraversalOrder, WeightTable, WeightedAdjacency};
//! use unitgraph::domain::{Relation, UnitId};
//! use unitgraph::graph::DependencyGraph;
//!
//! let graph = DependencyGraph::from_edges([
//!     ("A", "B", Some(Relation::Requires)),
//!     ("B", "C", Some(Relation::Conflicts)),
//!     ("A", "C", Some(Relation::Wants)),
//! ]);
//!
//! let root = analysis::select_root(&graph, &[UnitId::from(analysis::BOOTSTRAP_UNIT)]).unwrap();
//! assert_eq!(root.as_str(), "A");
//!
//! let tree = analysis::spanning_tree(&graph, &root, TraversalOrder::DepthFirst);
//! assert_eq!(tree.node_count(), 3);
//!
//! let weighted = WeightedAdjacency::build(&graph, &WeightTable::default());
//! let distances = analysis::shortest_distances(&weighted, &root).unwrap();
//! assert_eq!(distances.distance(&UnitId::from("C")).and_then(|d| d.value()), Some(3));
//! ```

pub mod root;
pub mod shortest_path;
pub mod traversal;
pub mod tree;
pub mod weights;

pub use root::{BOOTSTRAP_UNIT, select_root};
pub use shortest_path::{Distance, DistanceMap, shortest_distances};
pub use traversal::{TraversalOrder, bfs_tree, dfs_tree, spanning_tree};
pub use tree::{SpanningTree, TreeNode};
pub use weights::{WeightTable, WeightedAdjacency};
