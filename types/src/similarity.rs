use serde::{Deserialize, Serialize};

/// Supported ahnlich similarity algorithms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Algorithm {
    /// Euclidean distance is defined as the L2-norm of the difference between two vectors or their
    /// straight line distance between them. It
    /// considers both magnitude and direction of vectors
    EuclideanDistance,
    /// Dot product similarity is calculated by adding the product of the vectors corresponding
    /// components. It is a product of the vectors and the cosine of the angle between them
    DotProductSimilarity,
    /// Cosine similarity is the measure of the angle between two vectors. It is computed by taking
    /// the dot product of the vectors and dividing it by the product of their magnitudes. This
    /// metric is not affected by the magnitude of the vectors but only the angle bbetween them
    CosineSimilarity,
    /// Approximate search against a previously created non-linear index rather than a brute force
    /// scan of the entire store
    KDTree,
}

/// Non-linear algorithms for which indexes can be built ahead of search
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum NonLinearAlgorithm {
    KDTree,
}

/// Similarity score of a store entry against a search input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Similarity(pub f32);
