use super::*;

#[test]
fn file_display_name_strips_browser_fake_path() {
    assert_eq!(file_display_name(r"C:\fakepath\lecture.mp4"), "lecture.mp4");
    assert_eq!(file_display_name("/home/u/talk.m4a"), "talk.m4a");
    assert_eq!(file_display_name("clip.webm"), "clip.webm");
    assert_eq!(file_display_name(""), "");
}

#[test]
fn check_can_start_requires_a_file() {
    assert_eq!(check_can_start(&GenerateDraft::default(), false), Err("Choose an audio or video file first."));
    assert_eq!(check_can_start(&GenerateDraft::default(), true), Ok(()));
}

#[test]
fn check_can_start_blocks_while_uploading_or_running() {
    let uploading = GenerateDraft { uploading: true, ..GenerateDraft::default() };
    assert_eq!(check_can_start(&uploading, true), Err("A summary is already running."));

    let running = GenerateDraft { task: Some(TaskStatus::queued("t1")), ..GenerateDraft::default() };
    assert_eq!(check_can_start(&running, true), Err("A summary is already running."));
}

#[test]
fn finished_task_allows_a_new_upload() {
    let done = TaskStatus { status: "done".to_owned(), summary: Some("notes".to_owned()), ..TaskStatus::queued("t1") };
    let draft = GenerateDraft { task: Some(done), ..GenerateDraft::default() };
    assert!(!draft.is_running());
    assert_eq!(check_can_start(&draft, true), Ok(()));
}

#[test]
fn is_current_matches_task_id() {
    let draft = GenerateDraft { task: Some(TaskStatus::queued("t1")), ..GenerateDraft::default() };
    assert!(draft.is_current("t1"));
    assert!(!draft.is_current("t2"));
    assert!(!GenerateDraft::default().is_current("t1"));
}
