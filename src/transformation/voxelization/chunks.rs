use crate::transformation::voxelization::VoxelTag;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The number of voxels classified by a single work unit.
pub const PARALLEL_CHUNK_SIZE: usize = 100_000;

/// Runs `f` on consecutive chunks of `tags`, in parallel if the `parallel` feature is enabled.
///
/// `f` is given the linear index of the first voxel of its chunk. The smallest of the indices
/// returned by the chunks is returned.
pub(crate) fn classify_chunks<F>(tags: &mut [VoxelTag], f: F) -> Option<usize>
where
    F: Fn(usize, &mut [VoxelTag]) -> Option<usize> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        tags.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .enumerate()
            .filter_map(|(chunk_id, chunk)| f(chunk_id * PARALLEL_CHUNK_SIZE, chunk))
            .min()
    }

    #[cfg(not(feature = "parallel"))]
    {
        tags.chunks_mut(PARALLEL_CHUNK_SIZE)
            .enumerate()
            .filter_map(|(chunk_id, chunk)| f(chunk_id * PARALLEL_CHUNK_SIZE, chunk))
            .min()
    }
}
