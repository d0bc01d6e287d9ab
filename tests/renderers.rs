// tests/renderers.rs

mod common;
use crate::common::TestResult;

use std::time::Duration;

use cmdtimer::format::{LineFormatter, Templates};
use cmdtimer::render::terminal::{CLEAR_LINE, HIDE_CURSOR, RESTORE_POS, SAVE_POS, SHOW_CURSOR};
use cmdtimer::render::{FancyRenderer, PlainRenderer, Renderer};
use cmdtimer::timer::RunState;
use cmdtimer::types::{ChildStatus, LeaveMode};
use cmdtimer_test_utils::capture::CaptureBuffer;

fn simple_templates() -> Templates {
    Templates {
        standard: "{status} {timer} {msg}".to_string(),
        initial: "init {timer}".to_string(),
        final_: "final {status} {msg}\n".to_string(),
        running: "run".to_string(),
        success: "ok".to_string(),
        failure: "bad".to_string(),
        ..Templates::default()
    }
}

fn fancy(buf: &CaptureBuffer, leave: LeaveMode, hide_cursor: bool) -> FancyRenderer<CaptureBuffer> {
    let formatter = LineFormatter::new(simple_templates(), "job", 0);
    FancyRenderer::new(buf.clone(), formatter, leave, hide_cursor)
}

fn running(secs: u64) -> RunState {
    RunState::at(Duration::from_secs(secs), None)
}

fn finished(secs: u64, status: ChildStatus) -> RunState {
    RunState::at(Duration::from_secs(secs), Some(status))
}

#[test]
fn test_fancy_redraws_in_place() -> TestResult {
    let buf = CaptureBuffer::new();
    let mut r = fancy(&buf, LeaveMode::Never, false);

    r.begin()?;
    r.tick(&running(5))?;
    r.tick(&running(6))?;

    let expected = format!(
        "{SAVE_POS}{CLEAR_LINE}\
         {RESTORE_POS}{SAVE_POS}run 00:05 job{CLEAR_LINE}\
         {RESTORE_POS}{SAVE_POS}run 00:06 job{CLEAR_LINE}"
    );
    assert_eq!(buf.contents(), expected);
    Ok(())
}

#[test]
fn test_fancy_initial_render_uses_initial_template() -> TestResult {
    let buf = CaptureBuffer::new();
    let mut r = fancy(&buf, LeaveMode::Never, false);

    r.begin()?;
    r.initial(&running(0))?;

    assert_eq!(buf.contents(), format!("{SAVE_POS}{CLEAR_LINE}init  ··· "));
    Ok(())
}

#[test]
fn test_leave_never_clears_the_line() -> TestResult {
    let buf = CaptureBuffer::new();
    let mut r = fancy(&buf, LeaveMode::Never, false);

    r.begin()?;
    r.tick(&running(1))?;
    r.finish(&finished(2, ChildStatus::Exited(0)))?;

    let out = buf.contents();
    assert!(out.ends_with(&format!("{RESTORE_POS}{CLEAR_LINE}")));
    assert!(!out.contains("final"));
    Ok(())
}

#[test]
fn test_leave_always_keeps_final_line() -> TestResult {
    for status in [ChildStatus::Exited(0), ChildStatus::Exited(2)] {
        let buf = CaptureBuffer::new();
        let mut r = fancy(&buf, LeaveMode::Always, false);

        r.begin()?;
        r.finish(&finished(3, status))?;

        let word = if status.success() { "ok" } else { "bad" };
        assert!(
            buf.contents()
                .ends_with(&format!("{RESTORE_POS}{CLEAR_LINE}final {word} job\n"))
        );
    }
    Ok(())
}

#[test]
fn test_leave_on_failure() -> TestResult {
    let buf = CaptureBuffer::new();
    let mut r = fancy(&buf, LeaveMode::OnFailure, false);
    r.begin()?;
    r.finish(&finished(3, ChildStatus::Exited(1)))?;
    assert!(buf.contents().ends_with("final bad job\n"));

    let buf = CaptureBuffer::new();
    let mut r = fancy(&buf, LeaveMode::OnFailure, false);
    r.begin()?;
    r.finish(&finished(3, ChildStatus::Exited(0)))?;
    assert!(buf.contents().ends_with(&format!("{RESTORE_POS}{CLEAR_LINE}")));

    let buf = CaptureBuffer::new();
    let mut r = fancy(&buf, LeaveMode::OnFailure, false);
    r.begin()?;
    r.finish(&RunState::at(Duration::from_secs(3), None))?;
    assert!(buf.contents().ends_with("final bad job\n"));
    Ok(())
}

#[test]
fn test_hidden_cursor_is_restored_once() -> TestResult {
    let buf = CaptureBuffer::new();
    {
        let mut r = fancy(&buf, LeaveMode::Never, true);
        r.begin()?;
        r.finish(&finished(1, ChildStatus::Exited(0)))?;
    }

    let out = buf.contents();
    assert!(out.starts_with(HIDE_CURSOR));
    assert!(out.ends_with(SHOW_CURSOR));
    assert_eq!(out.matches(SHOW_CURSOR).count(), 1);
    Ok(())
}

#[test]
fn test_hidden_cursor_is_restored_on_abort() -> TestResult {
    let buf = CaptureBuffer::new();
    {
        let mut r = fancy(&buf, LeaveMode::Never, true);
        r.begin()?;
        r.tick(&running(1))?;
        // Dropped without `finish`, as after a render error.
    }
    assert!(buf.contents().ends_with(SHOW_CURSOR));
    Ok(())
}

#[test]
fn test_cursor_untouched_unless_hiding() -> TestResult {
    let buf = CaptureBuffer::new();
    {
        let mut r = fancy(&buf, LeaveMode::Never, false);
        r.begin()?;
        r.finish(&finished(1, ChildStatus::Exited(0)))?;
    }
    let out = buf.contents();
    assert!(!out.contains(HIDE_CURSOR));
    assert!(!out.contains(SHOW_CURSOR));
    Ok(())
}

#[test]
fn test_template_error_writes_nothing_for_that_tick() -> TestResult {
    let buf = CaptureBuffer::new();
    let templates = Templates {
        standard: "{nope}".to_string(),
        ..simple_templates()
    };
    let mut r = FancyRenderer::new(
        buf.clone(),
        LineFormatter::new(templates, "job", 0),
        LeaveMode::Never,
        false,
    );

    r.begin()?;
    let before = buf.contents();
    assert!(r.tick(&running(1)).is_err());
    assert_eq!(buf.contents(), before);
    Ok(())
}

#[test]
fn test_plain_renderer_dots_and_words() -> TestResult {
    let buf = CaptureBuffer::new();
    let mut r = PlainRenderer::new(buf.clone(), "compiling");

    r.begin()?;
    r.initial(&running(0))?;
    r.tick(&running(0))?;
    let mut changed = running(1);
    changed.tick_changed = true;
    r.tick(&changed)?;
    r.tick(&running(1))?;
    changed.elapsed = Duration::from_secs(2);
    r.tick(&changed)?;
    r.finish(&finished(2, ChildStatus::Exited(0)))?;

    assert_eq!(buf.contents(), "compiling ..done\n");
    Ok(())
}

#[test]
fn test_plain_renderer_failure_word() -> TestResult {
    for state in [
        finished(0, ChildStatus::Exited(1)),
        finished(0, ChildStatus::Signaled(2)),
        RunState::at(Duration::ZERO, None),
    ] {
        let buf = CaptureBuffer::new();
        let mut r = PlainRenderer::new(buf.clone(), "");
        r.begin()?;
        r.finish(&state)?;
        assert_eq!(buf.contents(), " fail\n");
    }
    Ok(())
}
