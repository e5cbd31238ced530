//! Capture Pipeline Integration Tests
//!
//! Exercises the toolkit end to end without a live tracker:
//! - synthesized binary STL bytes through the mesh reader
//! - mesh vertices through a pose-derived rigid transform and back
//! - transformed point sets through the axis sort
//! - decoded pose records through the CSV sink
//!
//! Run with: `cargo test --test capture_pipeline`

use approx::assert_relative_eq;
use drishti_io::core::{Axis, Mat4, Quat, Sequence, Vec3};
use drishti_io::mesh::{read_stl_binary, Triangle, HEADER_SIZE};
use drishti_io::spatial::{sort_by_axis, PointNode};
use drishti_io::streaming::{CsvSink, PoseRecord};
use std::f32::consts::FRAC_PI_4;
use std::fs;
use std::io::Write;

/// 90 degrees about +Z with a translation, as a tracker would report it.
fn sample_pose() -> PoseRecord {
    PoseRecord {
        id: "probe-1".to_string(),
        timestamp: "00:00:02".to_string(),
        position: Vec3::new(10.0, -4.0, 2.0),
        rotation: Quat::new(0.0, 0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos()),
        confidence: 240,
        trigger_activated: true,
    }
}

fn unit_quad() -> Vec<Triangle> {
    vec![
        Triangle {
            normal: Vec3::new(0.0, 0.0, 1.0),
            vertices: [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            attribute: 0,
        },
        Triangle {
            normal: Vec3::new(0.0, 0.0, 1.0),
            vertices: [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            attribute: 1,
        },
    ]
}

fn write_stl(triangles: &[Triangle]) -> tempfile::NamedTempFile {
    let mut bytes = vec![0u8; HEADER_SIZE];
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for t in triangles {
        bytes.extend_from_slice(&t.to_bytes());
    }
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_mesh_transform_sort_pipeline() {
    // Read the synthesized mesh back in
    let file = write_stl(&unit_quad());
    let mut triangles = Sequence::new();
    read_stl_binary(file.path(), &mut triangles).unwrap();
    assert_eq!(triangles.len(), 2);

    // Move every vertex into the tracked frame
    let pose = sample_pose();
    let transform = Mat4::from_translation_quat(pose.position, pose.rotation);
    let mut points: Sequence<Vec3> = Sequence::new();
    for triangle in &triangles {
        for vertex in &triangle.vertices {
            points.push(transform.transform_point(*vertex)).unwrap();
        }
    }
    assert_eq!(points.len(), 6);

    // Order the transformed set along Y and check the ordering holds
    let mut nodes: Sequence<PointNode<'_>> = Sequence::new();
    nodes.reserve(points.len()).unwrap();
    sort_by_axis(&mut nodes, Axis::Y, &points).unwrap();

    assert_eq!(nodes.len(), points.len());
    for pair in nodes.as_slice().windows(2) {
        assert!(pair[0].point.y <= pair[1].point.y);
    }

    // Still a permutation of the original indices
    let mut indices: Vec<u32> = (&nodes).into_iter().map(|n| n.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);

    // Undoing the transform recovers the original vertex for the first node
    let node = nodes[0];
    let original = transform.inverse_rigid().transform_point(*node.point);
    let flat: Vec<Vec3> = unit_quad()
        .iter()
        .flat_map(|t| t.vertices.to_vec())
        .collect();
    let expected = flat[node.index as usize];
    assert_relative_eq!(original.x, expected.x, epsilon = 1e-5);
    assert_relative_eq!(original.y, expected.y, epsilon = 1e-5);
    assert_relative_eq!(original.z, expected.z, epsilon = 1e-5);
}

#[test]
fn test_pose_record_to_csv_row() {
    let record = sample_pose();

    // Wire round-trip first, as the receiver would see it
    let decoded = PoseRecord::from_bytes(&record.to_bytes()).unwrap();
    assert_eq!(decoded, record);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("capture.csv");
    let mut sink = CsvSink::create(&path).unwrap();
    sink.append(0, &decoded).unwrap();
    sink.finish().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("id,seq,px,py,pz,qx,qy,qz,qw"));

    let row = lines.next().unwrap();
    let fields: Vec<&str> = row.split(',').collect();
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], "probe-1");
    assert_eq!(fields[1], "0");
    assert_relative_eq!(fields[2].trim().parse::<f32>().unwrap(), 10.0);
    // Rows carry six decimals, so compare at that precision
    assert_relative_eq!(
        fields[8].trim().parse::<f32>().unwrap(),
        FRAC_PI_4.cos(),
        epsilon = 1e-6
    );
}

#[test]
fn test_rigid_transform_chain_on_capture_poses() {
    // Two successive tracker poses; going through one frame and back out
    // of the other matches the directly composed relative transform.
    let a = Mat4::from_translation_quat(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::new(0.0, 0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos()),
    );
    let b = Mat4::from_translation_quat(
        Vec3::new(-2.0, 0.5, 1.0),
        Quat::new(0.5, 0.5, 0.5, 0.5),
    );

    let relative = b.inverse_rigid().multiply(&a);
    let p = Vec3::new(0.25, -1.0, 4.0);

    let direct = relative.transform_point(p);
    let chained = b.inverse_rigid().transform_point(a.transform_point(p));
    assert_relative_eq!(direct.x, chained.x, epsilon = 1e-5);
    assert_relative_eq!(direct.y, chained.y, epsilon = 1e-5);
    assert_relative_eq!(direct.z, chained.z, epsilon = 1e-5);
}
