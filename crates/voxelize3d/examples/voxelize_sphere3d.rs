use voxelize3d::bounding_volume::Aabb;
use voxelize3d::math::{Point, Real};
use voxelize3d::transformation::voxelization::{voxelize_implicit, VoxelTag};

fn main() {
    let radius = 0.8;
    let sphere = |pt: &Point<Real>| pt.coords.norm() - radius;
    let volume = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));

    for resolution in [8, 16, 32, 64] {
        let grid = voxelize_implicit(&sphere, &volume, resolution).expect("the volume is valid");
        let voxel_volume = grid.edge_length().powi(3);
        let inside = grid.count(VoxelTag::Inside) as Real * voxel_volume;
        let boundary = grid.count(VoxelTag::Boundary) as Real * voxel_volume;

        println!(
            "resolution {resolution:>3}: sphere volume in [{:.4}, {:.4}] (exact: {:.4})",
            inside,
            inside + boundary,
            4.0 / 3.0 * std::f64::consts::PI as Real * radius * radius * radius
        );
    }
}
