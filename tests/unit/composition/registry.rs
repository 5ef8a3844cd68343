use super::*;

fn short() -> CompositionSpec {
    let mut spec = CompositionSpec::news_video();
    spec.id = "NewsShort".to_owned();
    spec.canvas.width = 1080;
    spec.canvas.height = 1920;
    spec
}

#[test]
fn defaults_contain_news_video() {
    let reg = CompositionRegistry::with_defaults();
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get("NewsVideo").unwrap().duration_in_frames, 300);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut reg = CompositionRegistry::with_defaults();
    let err = reg.register(CompositionSpec::news_video()).unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn invalid_specs_are_rejected() {
    let mut reg = CompositionRegistry::new();
    assert!(reg.register(short().with_duration_frames(0)).is_err());
    assert!(reg.is_empty());
}

#[test]
fn ids_are_sorted() {
    let mut reg = CompositionRegistry::with_defaults();
    reg.register(short()).unwrap();
    assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["NewsShort", "NewsVideo"]);
    assert_eq!(reg.iter().count(), 2);
}

#[test]
fn unknown_id_lists_known_ones() {
    let reg = CompositionRegistry::with_defaults();
    let err = reg.get("Missing").unwrap_err();
    assert!(err.to_string().contains("NewsVideo"));
}
