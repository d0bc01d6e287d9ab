// tests/format_templates.rs

mod common;
use crate::common::TestResult;

use std::time::Duration;

use cmdtimer::errors::CmdTimerError;
use cmdtimer::format::{
    LineFormatter, LineKind, RenderContext, StatusGlyph, Templates, Vars, interpolate,
};
use cmdtimer::timer::RunState;
use cmdtimer::types::ChildStatus;

fn vars() -> Vars {
    Vars::new()
        .with("min", 3i64)
        .with("sec", 7i64)
        .with("msg", "hello")
        .with("neg", -4i64)
}

fn running_at(secs: u64) -> RunState {
    RunState::at(Duration::from_secs(secs), None)
}

fn formatter(templates: Templates) -> LineFormatter {
    LineFormatter::new(templates, "build", 2)
}

#[test]
fn test_plain_text_passes_through() -> TestResult {
    assert_eq!(interpolate("no placeholders here", &vars())?, "no placeholders here");
    assert_eq!(interpolate("", &vars())?, "");
    Ok(())
}

#[test]
fn test_fields_and_specs() -> TestResult {
    let v = vars();
    assert_eq!(interpolate("{min}:{sec}", &v)?, "3:7");
    assert_eq!(interpolate("{min:02d}:{sec:02d}", &v)?, "03:07");
    assert_eq!(interpolate("[{msg:>8}]", &v)?, "[   hello]");
    assert_eq!(interpolate("[{msg:<8}]", &v)?, "[hello   ]");
    assert_eq!(interpolate("[{msg:*^9}]", &v)?, "[**hello**]");
    assert_eq!(interpolate("[{min:4}]", &v)?, "[   3]");
    assert_eq!(interpolate("[{neg:04d}]", &v)?, "[-004]");
    assert_eq!(interpolate("[{msg:2}]", &v)?, "[hello]");
    Ok(())
}

#[test]
fn test_escaped_braces() -> TestResult {
    assert_eq!(interpolate("{{min}} is {min}", &vars())?, "{min} is 3");
    assert_eq!(interpolate("}}{{", &vars())?, "}{");
    Ok(())
}

#[test]
fn test_ansi_namespace() -> TestResult {
    let v = Vars::new();
    assert_eq!(interpolate("{F.B}x{F.X}", &v)?, "\x1b[1mx\x1b[0m");
    assert_eq!(interpolate("{F.fg.red}{F.bg.G}", &v)?, "\x1b[31m\x1b[42m");
    assert_eq!(interpolate("{F.fg.index}208m", &v)?, "\x1b[38;5;208m");
    assert_eq!(interpolate("{F.Xdim}{F.XB}", &v)?, "\x1b[22m\x1b[22m");
    Ok(())
}

#[test]
fn test_template_errors() {
    let v = vars();
    for bad in ["{missing}", "{F}", "{F.nope}", "{F.fg.pink}", "{}", "open {", "close }"] {
        match interpolate(bad, &v) {
            Err(CmdTimerError::Template(_)) => {}
            other => panic!("expected template error for {bad:?}, got {other:?}"),
        }
    }
    for bad in ["{msg:d}", "{min:s}", "{min:x}"] {
        assert!(
            matches!(interpolate(bad, &v), Err(CmdTimerError::Template(_))),
            "expected template error for {bad:?}"
        );
    }
}

#[test]
fn test_default_standard_line() -> TestResult {
    let line = formatter(Templates::default()).render(LineKind::Standard, &running_at(65))?;
    assert_eq!(line, "  \x1b[34m• \x1b[34m01:05\x1b[0m build ");
    Ok(())
}

#[test]
fn test_default_final_line_uses_zero_timer_under_a_second() -> TestResult {
    let state = RunState::at(Duration::from_millis(400), Some(ChildStatus::Exited(0)));
    let line = formatter(Templates::default()).render(LineKind::Final, &state)?;
    assert_eq!(line, "  \x1b[32m✔\x1b[0m \x1b[2m ··· \x1b[0m build\n");
    Ok(())
}

#[test]
fn test_final_line_failure_glyph_and_timer() -> TestResult {
    let state = RunState::at(Duration::from_secs(125), Some(ChildStatus::Signaled(2)));
    let line = formatter(Templates::default()).render(LineKind::Final, &state)?;
    assert_eq!(line, "  \x1b[31m✘\x1b[0m \x1b[2m02:05\x1b[0m build\n");
    Ok(())
}

#[test]
fn test_zero_timer_only_for_initial_or_finished() -> TestResult {
    let templates = Templates {
        standard: "{timer}".to_string(),
        initial: "{timer}".to_string(),
        zero_timer: "zero".to_string(),
        ..Templates::default()
    };
    let f = formatter(templates);

    assert_eq!(f.render(LineKind::Standard, &running_at(0))?, "00:00");
    assert_eq!(f.render(LineKind::Initial, &running_at(0))?, "zero");
    assert_eq!(f.render(LineKind::Initial, &running_at(1))?, "00:01");

    let done = RunState::at(Duration::ZERO, Some(ChildStatus::Exited(1)));
    assert_eq!(f.render(LineKind::Standard, &done)?, "zero");
    Ok(())
}

#[test]
fn test_resolution_order_allows_nesting() -> TestResult {
    let templates = Templates {
        message: "<{raw_msg}>".to_string(),
        timer: "{min}m{sec:02d}s for {msg}".to_string(),
        running: "[{timer}]".to_string(),
        standard: "{status}".to_string(),
        ..Templates::default()
    };
    let f = LineFormatter::new(templates, "job {sec}", 0);
    let line = f.render(LineKind::Standard, &running_at(61))?;
    assert_eq!(line, "[1m01s for <job 1>]");
    Ok(())
}

#[test]
fn test_self_reference_is_rejected() {
    let cases = [
        Templates {
            message: "{msg}".to_string(),
            ..Templates::default()
        },
        Templates {
            timer: "{status}".to_string(),
            ..Templates::default()
        },
        Templates {
            timer: "{timer}".to_string(),
            ..Templates::default()
        },
    ];
    for templates in cases {
        let result = formatter(templates).render(LineKind::Standard, &running_at(5));
        assert!(matches!(result, Err(CmdTimerError::Template(_))));
    }

    // The raw message only sees the base names.
    let f = LineFormatter::new(Templates::default(), "{msg}", 0);
    assert!(f.render(LineKind::Standard, &running_at(5)).is_err());
}

#[test]
fn test_render_context_breakdown() -> TestResult {
    let f = formatter(Templates::default());
    let ctx = RenderContext::resolve(&f, &running_at(3723), LineKind::Standard)?;
    assert_eq!(ctx.minutes, 62);
    assert_eq!(ctx.seconds, 3);
    assert_eq!(ctx.glyph, StatusGlyph::Running);
    assert_eq!(ctx.text("msg"), Some("build"));
    assert_eq!(ctx.text("timer"), Some("62:03"));
    assert_eq!(ctx.text("i"), Some("  "));
    Ok(())
}
