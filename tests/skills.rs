use glam::Vec2;
use portfolio_fx::geometry::Topology;
use portfolio_fx::scene::Material;
use portfolio_fx::scenes::{Animated, Spinner};
use portfolio_fx::skills::{
    float_offset, LabelPlacement, SkillCluster, BASE_EMISSIVE, HOVER_EMISSIVE, HOVER_SCALE, SKILLS,
};

fn assert_rest(cluster: &SkillCluster, skip: Option<usize>) {
    for i in (0..cluster.len()).filter(|&i| Some(i) != skip) {
        assert_eq!(cluster.transform(i).scale.x, 1.0, "sphere {i}");
        assert_eq!(cluster.emissive_intensity(i), BASE_EMISSIVE, "sphere {i}");
    }
}

#[test]
fn cluster_has_one_sphere_per_skill() {
    let cluster = SkillCluster::new(1.0);
    assert_eq!(cluster.len(), 7);
    assert_eq!(SKILLS[4].name, "Node.js");
    assert_rest(&cluster, None);
    assert_eq!(cluster.hovered(), None);
}

#[test]
fn hover_highlights_exactly_one() {
    let mut cluster = SkillCluster::new(1.0);
    cluster.set_hovered(Some(2));
    assert_eq!(cluster.transform(2).scale.x, HOVER_SCALE);
    assert_eq!(cluster.emissive_intensity(2), HOVER_EMISSIVE);
    assert_rest(&cluster, Some(2));

    cluster.set_hovered(Some(5));
    assert_eq!(cluster.hovered(), Some(5));
    assert_eq!(cluster.transform(5).scale.x, 1.3);
    assert_eq!(cluster.emissive_intensity(5), 0.5);
    assert_rest(&cluster, Some(5));

    cluster.set_hovered(None);
    assert_eq!(cluster.hovered(), None);
    assert_rest(&cluster, None);
}

#[test]
fn pointer_through_center_hovers_node() {
    // camera sits on +Z looking at the origin; only Node.js is on that axis
    let mut cluster = SkillCluster::new(1.0);
    assert_eq!(cluster.pointer_at(Vec2::ZERO), Some(4));
    assert_eq!(cluster.transform(4).scale.x, 1.3);
    assert_rest(&cluster, Some(4));

    assert_eq!(cluster.pointer_at(Vec2::new(0.99, -0.99)), None);
    assert_rest(&cluster, None);
}

#[test]
fn out_of_range_hover_is_ignored() {
    let mut cluster = SkillCluster::new(1.0);
    cluster.set_hovered(Some(99));
    assert_eq!(cluster.hovered(), None);
    assert_rest(&cluster, None);
}

#[test]
fn step_floats_spheres_and_sways_camera() {
    let mut cluster = SkillCluster::new(1.0);
    let t = 12.5;
    cluster.step(t);
    for (i, skill) in SKILLS.iter().enumerate() {
        let y = cluster.transform(i).position.y;
        assert!((y - (skill.position[1] + float_offset(t, i))).abs() < 1e-6);
        assert!((cluster.transform(i).rotation.y - 0.01).abs() < 1e-7);
        assert!((cluster.transform(i).rotation.x - 0.005).abs() < 1e-7);
    }
    let x = cluster.camera().position.x;
    assert!((x - ((t * 0.1).sin() * 2.0) as f32).abs() < 1e-6);
    assert_eq!(cluster.camera().target, glam::Vec3::ZERO);
}

#[test]
fn float_offset_is_bounded() {
    for i in 0..7 {
        for t in [0.0, 1.0, 33.3, 1e6] {
            assert!(float_offset(t, i).abs() <= 0.3 + 1e-6);
        }
    }
}

#[test]
fn labels_follow_spheres() {
    let cluster = SkillCluster::new(800.0 / 600.0);
    let labels = cluster.label_placements(800.0, 600.0);
    assert_eq!(labels.len(), 7);
    assert!(labels.iter().all(|l| l.visible));
    // Java is up and to the left, Python up and to the right
    assert!(labels[0].x < 400.0 && labels[0].y < 300.0);
    assert!(labels[1].x > 400.0 && labels[1].y < 300.0);
}

#[test]
fn label_hidden_past_far_plane() {
    let hidden = LabelPlacement::from_ndc(glam::Vec3::new(0.0, 0.0, 1.2), 100.0, 100.0);
    assert!(!hidden.visible);
    let shown = LabelPlacement::from_ndc(glam::Vec3::new(0.0, 0.0, 0.9), 100.0, 100.0);
    assert!(shown.visible);
    assert_eq!((shown.x, shown.y), (50.0, 50.0));
}

#[test]
fn spinners_advance_by_fixed_deltas() {
    let mut about = Spinner::about(1.0);
    for _ in 0..10 {
        about.step(0.0);
    }
    let r = about.scene().meshes[0].transform.rotation;
    assert!((r.x - 0.1).abs() < 1e-5 && (r.y - 0.1).abs() < 1e-5);

    let mut contact = Spinner::contact(1.0);
    contact.step(0.0);
    let r = contact.scene().meshes[0].transform.rotation;
    assert!((r.x - 0.01).abs() < 1e-7 && (r.y - 0.02).abs() < 1e-7);

    let mut n = 0.25;
    let mut rng = move || {
        n = (n + 0.37) % 1.0;
        n
    };
    let mut hero = Spinner::hero(1.0, &mut rng);
    assert_eq!(hero.scene().meshes.len(), 2);
    hero.step(0.0);
    assert!((hero.scene().meshes[0].transform.rotation.y - 0.005).abs() < 1e-7);
    assert!((hero.scene().meshes[1].transform.rotation.x - 0.0005).abs() < 1e-7);
    assert_eq!(hero.camera().position.z, 5.0);
}

#[test]
fn hero_stars_use_world_sized_points() {
    let mut rng = || 0.5;
    let hero = Spinner::hero(1.0, &mut rng);
    let stars = &hero.scene().meshes[1];
    assert_eq!(stars.geometry.topology, Topology::Points);
    assert_eq!(stars.geometry.vertex_count(), 100);
    assert!(matches!(stars.material, Material::Points { size, .. } if size == 0.05));
    assert!(matches!(hero.scene().meshes[0].material, Material::Basic { .. }));
}
