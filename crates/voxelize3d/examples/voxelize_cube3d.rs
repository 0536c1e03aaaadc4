use voxelize3d::bounding_volume::{Aabb, BoundingVolume};
use voxelize3d::math::Point;
use voxelize3d::partitioning::OctreeParameters;
use voxelize3d::shape::PolyMesh;
use voxelize3d::transformation::voxelization::{voxelize_mesh_within, VoxelTag};

fn main() {
    let cube = Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5));
    let volume = cube.loosened(0.25);
    let mesh = PolyMesh::from_aabb(&cube);

    let grid = voxelize_mesh_within(&mesh, &volume, 12, &OctreeParameters::default())
        .expect("the volume is valid");

    println!(
        "{:?} voxels of size {}: {} boundary, {} inside, {} outside (flood seed: {:?}).",
        grid.dimensions(),
        grid.edge_length(),
        grid.count(VoxelTag::Boundary),
        grid.count(VoxelTag::Inside),
        grid.count(VoxelTag::Outside),
        grid.flood_seed()
    );

    // Print the middle slice.
    let dims = grid.dimensions();
    let k = dims.z / 2;
    for j in (0..dims.y).rev() {
        let row: String = (0..dims.x)
            .map(|i| match grid.tag_at(&Point::new(i, j, k)) {
                Some(VoxelTag::Boundary) => '#',
                Some(VoxelTag::Inside) => 'o',
                _ => '.',
            })
            .collect();
        println!("{row}");
    }
}
