//! Driving loop behavior: cancellation, skipped paints, frame limits.

use std::io;

use tui_donut::core::{
    render, CancelToken, DisplaySink, Driver, Frame, ImmediateTicks, MarkupSink, SinkError,
    Tick, TickSource,
};
use tui_donut::types::RotationState;

/// Records frames; optionally unavailable on some ticks or cancelling after a few.
#[derive(Default)]
struct ScriptedSink {
    painted: Vec<Frame>,
    calls: u64,
    unavailable_every: Option<u64>,
    cancel_after: Option<(u64, CancelToken)>,
    fail_on: Option<u64>,
}

impl DisplaySink for ScriptedSink {
    fn paint(&mut self, frame: &Frame) -> Result<(), SinkError> {
        let call = self.calls;
        self.calls += 1;

        if let Some((after, token)) = &self.cancel_after {
            if self.calls >= *after {
                token.cancel();
            }
        }
        if self.fail_on == Some(call) {
            return Err(SinkError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone")));
        }
        if let Some(every) = self.unavailable_every {
            if call % every == 0 {
                return Err(SinkError::Unavailable("torn down".into()));
            }
        }
        self.painted.push(frame.clone());
        Ok(())
    }
}

#[test]
fn frames_follow_the_angle_sequence() {
    let mut driver = Driver::new(
        ImmediateTicks::new(Some(4)),
        ScriptedSink::default(),
        CancelToken::new(),
    );
    let summary = driver.run().unwrap();
    assert_eq!(summary.ticks, 4);
    assert_eq!(summary.painted, 4);

    let mut state = RotationState::default();
    for frame in &driver.sink().painted {
        let (expected, next) = render(state);
        assert_eq!(frame, &expected);
        state = next;
    }
    assert_eq!(summary.final_state, state);
    assert_eq!(driver.state(), state);
}

#[test]
fn unavailable_sink_skips_paint_but_keeps_rotating() {
    let sink = ScriptedSink {
        unavailable_every: Some(2),
        ..Default::default()
    };
    let mut driver = Driver::new(ImmediateTicks::new(Some(6)), sink, CancelToken::new());
    let summary = driver.run().unwrap();

    assert_eq!(summary.ticks, 6);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.painted, 3);
    assert!((summary.final_state.angle_a - 0.24).abs() < 1e-12);
    assert!((summary.final_state.angle_b - 0.12).abs() < 1e-12);

    // Painted frames are ticks 1, 3, 5.
    let (expected, _) = render(RotationState::new(0.04, 0.02));
    assert_eq!(driver.sink().painted[0], expected);
}

#[test]
fn no_render_after_cancel() {
    let cancel = CancelToken::new();
    let sink = ScriptedSink {
        cancel_after: Some((3, cancel.clone())),
        ..Default::default()
    };
    let mut driver = Driver::new(ImmediateTicks::new(None), sink, cancel.clone());
    let summary = driver.run().unwrap();

    assert!(cancel.is_cancelled());
    assert_eq!(summary.ticks, 3);
    assert_eq!(driver.sink().calls, 3);
}

/// Cancels the token from inside the wait for the next tick.
struct TeardownWhileWaiting {
    cancel: CancelToken,
    ticks: u64,
}

impl TickSource for TeardownWhileWaiting {
    fn next_tick(&mut self) -> Option<Tick> {
        self.ticks += 1;
        if self.ticks == 2 {
            self.cancel.cancel();
        }
        Some(Tick {
            index: self.ticks - 1,
        })
    }
}

#[test]
fn teardown_during_wait_stops_before_render() {
    let cancel = CancelToken::new();
    let ticks = TeardownWhileWaiting {
        cancel: cancel.clone(),
        ticks: 0,
    };
    let mut driver = Driver::new(ticks, ScriptedSink::default(), cancel);
    let summary = driver.run().unwrap();
    assert_eq!(summary.ticks, 1);
    assert_eq!(driver.sink().calls, 1);
}

#[test]
fn io_failure_stops_the_loop() {
    let sink = ScriptedSink {
        fail_on: Some(2),
        ..Default::default()
    };
    let mut driver = Driver::new(ImmediateTicks::new(None), sink, CancelToken::new());
    let err = driver.run().unwrap_err();
    assert!(matches!(err, SinkError::Io(_)));
    assert_eq!(driver.sink().painted.len(), 2);
}

#[test]
fn frame_limit_caps_unbounded_ticks() {
    let mut driver = Driver::new(
        ImmediateTicks::new(None),
        ScriptedSink::default(),
        CancelToken::new(),
    )
    .with_state(RotationState::new(1.0, 1.0))
    .with_frame_limit(Some(5));
    let summary = driver.run().unwrap();
    assert_eq!(summary.ticks, 5);
    assert!((summary.final_state.angle_a - 1.2).abs() < 1e-12);
}

#[test]
fn markup_sink_streams_frames() {
    let mut driver = Driver::new(
        ImmediateTicks::new(Some(2)),
        MarkupSink::new(Vec::new()),
        CancelToken::new(),
    );
    driver.run().unwrap();
    let out = String::from_utf8(driver.into_sink().into_inner()).unwrap();

    let (first, next) = render(RotationState::default());
    let (second, _) = render(next);
    assert_eq!(
        out,
        format!(
            "{}{}{}",
            first.to_markup(),
            tui_donut::core::markup::FRAME_SEPARATOR,
            second.to_markup()
        )
    );
}
