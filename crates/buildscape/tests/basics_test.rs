//! Basic integration tests for buildscape.
//!
//! These exercise the public surface the way a host viewer would: build the
//! scene once, then drive the camera through input sequences.

use buildscape::*;

fn sparse_options() -> SceneOptions {
    SceneOptions {
        density_divisor: 50.0,
        ..SceneOptions::default()
    }
}

#[test]
fn test_scene_synthesis_end_to_end() {
    let scene = BuildingScene::synthesize(sparse_options(), 1234);

    // One cloud per standard segment, in order, each paired with its envelope.
    assert_eq!(scene.clouds.len(), 5);
    assert_eq!(scene.clouds[0].kind, SegmentKind::Wall);
    assert_eq!(scene.clouds[0].len(), 1700); // 85_000 / 50
    for cloud in &scene.clouds {
        assert_eq!(cloud.envelope, cloud.kind.envelope());
        assert!(!cloud.is_empty());
    }

    // Manifest agrees with the clouds and serializes cleanly.
    assert_eq!(
        scene.total_points(),
        scene.clouds.iter().map(SegmentCloud::len).sum::<usize>()
    );
    let json = scene.manifest.to_json().expect("manifest to_json failed");
    assert!(json.contains("\"walls\""));
    assert!(json.contains("\"hvac\""));
}

#[test]
fn test_wall_cloud_respects_bounding_bands() {
    let scene = BuildingScene::synthesize(sparse_options(), 77);
    let walls = &scene.clouds[0];
    assert_eq!(walls.kind, SegmentKind::Wall);

    for sample in &walls.samples {
        let p = sample.position;
        assert!((-28.0..=108.0).contains(&p.y), "wall y out of range: {p}");
        // The dominant face coordinate sits on one of the +/-60 planes.
        let on_x_face = (p.x.abs() - 60.0).abs() < 1e-3;
        let on_z_face = (p.z.abs() - 60.0).abs() < 1e-3;
        assert!(on_x_face || on_z_face, "wall point off face planes: {p}");
    }
}

#[test]
fn test_samples_feed_renderer_contract() {
    let scene = BuildingScene::synthesize(sparse_options(), 8);
    for cloud in &scene.clouds {
        for sample in &cloud.samples {
            for axis in 0..3 {
                let channel = sample.color[axis];
                assert!(channel >= cloud.base_color[axis] * 0.9 - f32::EPSILON);
                assert!(channel <= cloud.base_color[axis] * 1.1 + f32::EPSILON);
            }
            assert!((0.5..=1.1).contains(&sample.size));
        }
    }
}

#[test]
fn test_camera_session_like_a_host_event_loop() {
    let mut camera = OrbitCamera::default();

    // Pointer drag
    camera.begin_drag(100.0, 100.0).unwrap();
    camera.update_drag(150.0, 80.0).unwrap();
    camera.end_drag();

    // Wheel and pinch zoom
    camera.zoom(ZoomDirection::In);
    camera.pinch_zoom(120.0, 60.0).unwrap();

    // Keyboard nudges
    camera.nudge(NudgeDirection::Left, 0.1).unwrap();
    camera.nudge(NudgeDirection::ZoomOut, 50.0).unwrap();

    // Auto-rotate over a few simulated frames
    camera.toggle_auto_rotate();
    for _ in 0..60 {
        camera.tick(1.0 / 60.0).unwrap();
    }

    // The eye always stays on the orbit sphere, looking at the origin.
    let eye = camera.cartesian_position();
    assert!((eye.length() - camera.radius()).abs() < camera.radius() * 1e-4);
    assert!((50.0..=1200.0).contains(&camera.radius()));

    let view = camera.view_matrix();
    let origin_in_view = view.transform_point3(Vec3::ZERO);
    assert!((origin_in_view.z + camera.radius()).abs() < 0.1);

    // Reset lands exactly on the documented defaults.
    camera.reset();
    assert_eq!(*camera.state(), OrbitState::default());
}

#[test]
fn test_custom_segments_and_unknown_kind() {
    let segments = vec![
        SegmentDescriptor::new(SegmentKind::Roof, 5_000, Vec3::new(0.1, 0.7, 0.5)),
        SegmentDescriptor::new(SegmentKind::from_name("solar-array"), 5_000, Vec3::ONE),
    ];
    let scene = BuildingScene::synthesize_segments(SceneOptions::default(), &segments, 11);

    assert_eq!(scene.clouds.len(), 2);
    assert_eq!(scene.clouds[1].kind, SegmentKind::Other);
    assert_eq!(scene.clouds[1].len(), 3_333); // 5_000 / 1.5

    // Unknown segments fall back to the generic cuboid volume.
    let envelope = SegmentKind::Other.envelope();
    for sample in &scene.clouds[1].samples {
        assert!(envelope.contains(sample.position));
    }
}
