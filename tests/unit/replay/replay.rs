use super::*;

struct FailEvery(usize);

impl PageProbe for FailEvery {
    fn probe(&mut self, page: &Page) -> LoadOutcome {
        if page.index.0 % self.0 == 0 {
            LoadOutcome::Failed
        } else {
            LoadOutcome::Loaded
        }
    }
}

fn script(n: usize, steps: Vec<(u64, InputEvent)>) -> Script {
    Script {
        pages: (0..n).map(|i| format!("{i}.jpg")).collect(),
        config: None,
        steps: steps
            .into_iter()
            .map(|(at_ms, input)| ScriptStep { at_ms, input })
            .collect(),
    }
}

#[test]
fn replays_a_single_turn() {
    let s = script(10, vec![(100, InputEvent::Next)]);
    let report = replay(&s, None, &mut AlwaysLoaded).unwrap();
    assert_eq!(report.final_spread, SpreadIndex(1));
    assert_eq!(report.page_changes(), 1);

    let change = report
        .events
        .iter()
        .find(|e| matches!(e.event, FlipEvent::PageChange { .. }))
        .unwrap();
    assert_eq!(change.at_ms, 1_000);
    assert_eq!(change.event, FlipEvent::PageChange { page: PageIndex(2) });
}

#[test]
fn rapid_double_next_turns_once() {
    let s = script(10, vec![(0, InputEvent::Next), (10, InputEvent::Next)]);
    let report = replay(&s, None, &mut AlwaysLoaded).unwrap();
    assert_eq!(report.page_changes(), 1);
    assert_eq!(report.final_spread, SpreadIndex(1));
}

#[test]
fn failed_loads_do_not_stall_navigation() {
    let s = script(10, vec![(0, InputEvent::Next), (2_000, InputEvent::Next)]);
    let report = replay(&s, None, &mut FailEvery(2)).unwrap();
    assert_eq!(report.final_spread, SpreadIndex(2));
    assert_eq!(report.page_changes(), 2);
}

#[test]
fn steps_are_replayed_in_time_order() {
    let s = script(
        10,
        vec![(5_000, InputEvent::Prev), (0, InputEvent::GoTo(SpreadIndex(3)))],
    );
    let report = replay(&s, None, &mut AlwaysLoaded).unwrap();
    assert_eq!(report.final_spread, SpreadIndex(2));
    assert_eq!(report.ended_at_ms, 5_900);
}

#[test]
fn script_config_applies_unless_overridden() {
    let mut s = script(10, vec![(0, InputEvent::Next)]);
    let mut cfg = FlipbookConfig::default();
    cfg.timing.duration_ms = 500;
    cfg.timing.face_swap_ms = 200;
    s.config = Some(cfg);
    let report = replay(&s, None, &mut AlwaysLoaded).unwrap();
    assert_eq!(report.ended_at_ms, 500);

    let report = replay(&s, Some(FlipbookConfig::default()), &mut AlwaysLoaded).unwrap();
    assert_eq!(report.ended_at_ms, 900);
}

#[test]
fn script_parses_from_json() {
    let json = r#"{
        "pages": ["a.jpg", "b.jpg", "c.jpg"],
        "steps": [
            { "at_ms": 0, "input": { "key": "arrow_right" } },
            { "at_ms": 50, "input": { "swipe": { "from": { "x": 300, "y": 0 }, "to": { "x": 100, "y": 0 } } } }
        ]
    }"#;
    let s = Script::from_reader(json.as_bytes()).unwrap();
    assert_eq!(s.pages.len(), 3);
    assert_eq!(s.steps.len(), 2);
    assert!(s.config.is_none());
}

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "flipbook_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(path: &std::path::Path) {
    let img = image::RgbaImage::from_raw(2, 2, vec![200u8; 16]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

#[test]
fn fs_probe_reads_real_images() {
    let tmp = temp_dir("fs_probe_reads_real_images");
    std::fs::create_dir_all(&tmp).unwrap();
    write_png(&tmp.join("cover.png"));
    std::fs::write(tmp.join("torn.png"), b"not an image").unwrap();

    let mut probe = FsProbe::open(&tmp).unwrap();
    assert_eq!(probe.probe(&Page::new(0, "cover.png")), LoadOutcome::Loaded);
    assert_eq!(probe.probe(&Page::new(1, "torn.png")), LoadOutcome::Failed);

    std::fs::remove_dir_all(&tmp).unwrap();
}

#[test]
fn fs_probe_open_requires_a_directory() {
    let err = FsProbe::open("does/not/exist").unwrap_err();
    assert!(matches!(err, FlipbookError::Asset(_)));
    assert!(err.to_string().contains("asset error:"));
}

#[test]
fn fs_probe_marks_missing_files_failed() {
    let mut probe = FsProbe::new("does/not/exist");
    assert_eq!(probe.probe(&Page::new(0, "cover.jpg")), LoadOutcome::Failed);
}

#[test]
fn timed_events_serialize_flat() {
    let ev = TimedEvent {
        at_ms: 7,
        event: FlipEvent::FaceSwap { to: SpreadIndex(2) },
    };
    let v = serde_json::to_value(&ev).unwrap();
    assert_eq!(v, serde_json::json!({ "at_ms": 7, "event": "face_swap", "to": 2 }));
}
