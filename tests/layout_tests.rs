use std::sync::Arc;

use bounce_scene::layout::{load_layout, LevelLayout, PlatformPlacement};
use bounce_scene::physics::ContactMaterial;
use bounce_scene::scenes::{assemble, bounce_layout, create_bounce_scene, scene_by_name};
use bounce_scene::SceneError;
use glam::Vec3;

const LEVEL: &str = r#"{
    "materials": [
        { "name": "solid", "friction": 0.4, "restitution": 0.0 },
        { "name": "bouncy", "friction": 0.1, "restitution": 0.9 }
    ],
    "platforms": [
        { "y": -1, "material": "solid" },
        { "x": 4, "y": 0.5, "z": -9, "material": "bouncy" },
        { "z": -20, "material": "solid", "tag": "goal" }
    ]
}"#;

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_layout_resolves_positions_and_tags() {
        let layout = LevelLayout::from_json(LEVEL).unwrap();
        let configs = layout.platform_configs().unwrap();

        assert_eq!(configs.len(), 3);
        assert_eq!(configs[0].position, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(configs[1].position, Vec3::new(4.0, 0.5, -9.0));
        assert!(configs[0].tag.is_none());
        assert_eq!(configs[2].tag.as_ref().map(|t| t.as_str()), Some("goal"));
    }

    #[test]
    fn test_layout_shares_material_instances() {
        let layout = LevelLayout::from_json(LEVEL).unwrap();
        let configs = layout.platform_configs().unwrap();

        let first = configs[0].contact_material.as_ref().unwrap();
        let goal = configs[2].contact_material.as_ref().unwrap();
        assert!(Arc::ptr_eq(first, goal), "same material name should share one instance");
        assert_eq!(configs[1].contact_material.as_ref().unwrap().restitution, 0.9);
    }

    #[test]
    fn test_unknown_material_is_an_error() {
        let layout = LevelLayout {
            materials: Vec::new(),
            platforms: vec![PlatformPlacement {
                material: Some("lava".to_string()),
                ..PlatformPlacement::default()
            }],
        };
        assert!(matches!(
            layout.platform_configs(),
            Err(SceneError::UnknownMaterial(name)) if name == "lava"
        ));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            LevelLayout::from_json("{ not json"),
            Err(SceneError::Layout(_))
        ));
    }

    #[test]
    fn test_layout_json_survives_rewrite() {
        let layout = LevelLayout::from_json(LEVEL).unwrap();
        let rewritten = LevelLayout::from_json(&layout.to_json().unwrap()).unwrap();
        assert_eq!(layout, rewritten);
    }

    #[test]
    fn test_load_layout_from_file() {
        let path = std::env::temp_dir().join(format!("bounce-layout-{}.json", std::process::id()));
        std::fs::write(&path, LEVEL).unwrap();

        let layout = load_layout(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(layout.platforms.len(), 3);
        assert_eq!(layout.materials[1], ContactMaterial::new("bouncy", 0.1, 0.9));
    }

    #[test]
    fn test_load_layout_missing_file() {
        let err = load_layout("/nonexistent/bounce-level.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read level layout"));
    }

    #[test]
    fn test_strict_assembly_rejects_platform_without_material() {
        let layout = LevelLayout::from_json(r#"{"platforms":[{"x":1}]}"#).unwrap();

        assert!(matches!(
            assemble(&layout, true),
            Err(SceneError::MissingContactMaterial)
        ));

        let scene = assemble(&layout, false).unwrap();
        assert_eq!(scene.platforms.len(), 1);
        assert!(scene.platforms[0].body.material.is_none());
    }

    #[test]
    fn test_bounce_scene() {
        let scene = create_bounce_scene(false).unwrap();

        assert!(scene.platforms.iter().all(|p| p.in_sync() && p.body.is_static()));
        assert!(scene.platforms.iter().all(|p| p.body.material.is_some()));
        assert_eq!(scene.find_tagged("goal").count(), 1);
        assert_eq!(scene.find_tagged("wall").count(), 2);
        assert_eq!(scene.lights.descriptors().len(), 2);

        let summary = scene.summary();
        assert_eq!(summary.platforms.len(), scene.platforms.len());
        assert!(summary.platforms.iter().any(|p| p.tag.as_deref() == Some("goal")));
    }

    #[test]
    fn test_shipped_level_assembles_strictly() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("levels/bounce.json");
        let layout = load_layout(path).unwrap();
        let scene = assemble(&layout, true).unwrap();

        assert_eq!(scene.platforms.len(), 6);
        assert_eq!(scene.find_tagged("goal").count(), 1);
    }

    #[test]
    fn test_builtin_scene_matches_shipped_level() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("levels/bounce.json");
        let from_file = assemble(&load_layout(path).unwrap(), true).unwrap();
        let builtin = create_bounce_scene(true).unwrap();

        let placements = |scene: &bounce_scene::SceneAssembly| {
            scene
                .platforms
                .iter()
                .map(|p| (p.body.position, p.tag().map(str::to_owned)))
                .collect::<Vec<_>>()
        };
        assert_eq!(placements(&builtin), placements(&from_file));
        assert_eq!(builtin.bounds(), from_file.bounds());
    }

    #[test]
    fn test_scene_bounds_cover_every_platform() {
        let scene = create_bounce_scene(false).unwrap();
        let bounds = scene.bounds().unwrap();

        for platform in &scene.platforms {
            let b = platform.bounds();
            assert!(b.min.cmpge(bounds.min).all() && b.max.cmple(bounds.max).all());
        }
        assert_eq!(bounds.min, Vec3::new(-15.0, -1.4, -30.0));
        assert_eq!(bounds.max, Vec3::new(15.0, 3.9, 3.0));
    }

    #[test]
    fn test_empty_scene_has_no_bounds() {
        let scene = assemble(&LevelLayout::default(), true).unwrap();
        assert!(scene.bounds().is_none());
    }

    #[test]
    fn test_builtin_scene_honours_strict() {
        let scene = scene_by_name("bounce", true).unwrap();
        assert_eq!(scene.platforms.len(), 6);
        assert!(scene.platforms.iter().all(|p| p.body.material.is_some()));

        let mut layout = bounce_layout().unwrap();
        layout.platforms[0].material = None;
        assert!(matches!(
            assemble(&layout, true),
            Err(SceneError::MissingContactMaterial)
        ));
        assert!(assemble(&layout, false).is_ok());
    }

    #[test]
    fn test_scene_by_name() {
        assert!(scene_by_name("bounce", false).is_ok());
        assert!(matches!(
            scene_by_name("fractal", false),
            Err(SceneError::UnknownScene(name)) if name == "fractal"
        ));
    }
}
