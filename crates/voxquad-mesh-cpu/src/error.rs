use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh grew past the vertex budget; nothing is returned.
    #[error(
        "mesh needs more than {budget} vertices ({vertices} so far); split the volume into smaller pieces"
    )]
    VertexBudgetExceeded { vertices: usize, budget: usize },
}
