use super::*;

fn scenes() -> Vec<Scene> {
    vec![Scene::new(0.0, "img1"), Scene::new(10.0, "img2")]
}

#[test]
fn picks_latest_timestamp_not_after_time() {
    let scenes = scenes();
    assert_eq!(active_scene(&scenes, 5.0).unwrap().image_path, "img1");
    assert_eq!(active_scene(&scenes, 10.0).unwrap().image_path, "img2");
    assert_eq!(active_scene(&scenes, 15.0).unwrap().image_path, "img2");
}

#[test]
fn time_before_every_scene_falls_back_to_first() {
    let scenes = scenes();
    assert_eq!(active_scene(&scenes, -1.0).unwrap().image_path, "img1");

    let late = vec![Scene::new(4.0, "a"), Scene::new(8.0, "b")];
    assert_eq!(active_scene(&late, 1.0).unwrap().image_path, "a");
}

#[test]
fn empty_yields_none() {
    assert!(active_scene(&[], 3.0).is_none());
}

#[test]
fn equal_timestamps_keep_the_earlier_entry() {
    let scenes = vec![
        Scene::new(0.0, "a"),
        Scene::new(5.0, "b"),
        Scene::new(5.0, "c"),
    ];
    assert_eq!(active_scene(&scenes, 6.0).unwrap().image_path, "b");
}

#[test]
fn decreasing_timestamps_follow_fold_rule() {
    // The accumulator only advances to strictly later timestamps.
    let scenes = vec![
        Scene::new(10.0, "late"),
        Scene::new(2.0, "early"),
        Scene::new(12.0, "latest"),
    ];
    assert_eq!(active_scene(&scenes, 5.0).unwrap().image_path, "late");
    assert_eq!(active_scene(&scenes, 12.0).unwrap().image_path, "latest");
}

#[test]
fn sorted_input_matches_greatest_not_exceeding() {
    let scenes = vec![
        Scene::new(0.0, "s0"),
        Scene::new(3.0, "s1"),
        Scene::new(7.5, "s2"),
        Scene::new(20.0, "s3"),
    ];
    for i in 0..250 {
        let t = f64::from(i) * 0.1;
        let expected = scenes
            .iter()
            .filter(|s| s.timestamp <= t)
            .last()
            .unwrap_or(&scenes[0]);
        assert_eq!(active_scene(&scenes, t), Some(expected), "t={t}");
    }
}

#[test]
fn json_uses_image_path_camel_case() {
    let s: Scene = serde_json::from_str(r#"{ "timestamp": 1.5, "imagePath": "a.png" }"#).unwrap();
    assert_eq!(s, Scene::new(1.5, "a.png"));
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["imagePath"], "a.png");
}
