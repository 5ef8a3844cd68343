use super::*;
use crate::{scene::model::Scene, subtitle::model::Subtitle};

#[test]
fn news_video_metadata() {
    let spec = CompositionSpec::news_video();
    assert_eq!(spec.id, "NewsVideo");
    assert_eq!(spec.duration_in_frames, 300);
    assert_eq!(spec.fps, Fps::whole(30).unwrap());
    assert_eq!(spec.canvas.width, 1920);
    assert_eq!(spec.canvas.height, 1080);
    assert!(spec.default_props.subtitles.is_empty());
    assert!(spec.default_props.audio_url.is_empty());
    assert_eq!(spec.duration_secs(), 10.0);
    spec.validate().unwrap();
}

#[test]
fn validate_rejects_bad_metadata() {
    let mut spec = CompositionSpec::news_video();
    spec.fps = Fps { num: 30, den: 0 };
    assert!(spec.validate().is_err());

    let mut spec = CompositionSpec::news_video();
    spec.id = " ".to_owned();
    assert!(spec.validate().is_err());

    let spec = CompositionSpec::news_video().with_duration_frames(0);
    assert!(spec.validate().is_err());

    let mut spec = CompositionSpec::news_video();
    spec.canvas.height = 0;
    assert!(spec.validate().is_err());

    let mut spec = CompositionSpec::news_video();
    spec.ken_burns.ramp_frames = 0.0;
    assert!(spec.validate().is_err());
}

#[test]
fn json_roundtrip_fills_optional_sections() {
    let spec: CompositionSpec = serde_json::from_str(
        r#"{
            "id": "Short",
            "duration_in_frames": 90,
            "fps": { "num": 30, "den": 1 },
            "canvas": { "width": 1080, "height": 1920 }
        }"#,
    )
    .unwrap();
    assert_eq!(spec.ken_burns, KenBurns::default());
    assert_eq!(spec.style, Style::default());
    assert!(spec.default_props.scenes.is_empty());
    assert_eq!(spec.full_range().len_frames(), 90);
}

#[test]
fn fitted_duration_covers_last_subtitle() {
    let spec = CompositionSpec::news_video();
    let props = RenderProps::new(
        vec![Subtitle::new(0.0, 2.0, "a"), Subtitle::new(2.0, 14.5, "b")],
        "",
        vec![Scene::new(0.0, "x"), Scene::new(12.0, "y")],
    );
    assert_eq!(spec.fitted_duration_frames(&props), 435);

    let short = RenderProps::new(vec![Subtitle::new(0.0, 1.0, "a")], "", vec![]);
    assert_eq!(spec.fitted_duration_frames(&short), 300);
}
