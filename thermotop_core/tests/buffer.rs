//! SampleBuffer retention, windowing, and error behavior.

use thermotop_core::{BufferError, Retention, Sample, SampleBuffer};

fn s(t: f64) -> Sample {
    Sample {
        timestamp: t,
        temperature: 26.5,
        setpoint: 27.0,
        heater_output: 40.0,
    }
}

fn timestamps(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.timestamp).collect()
}

#[test]
fn count_retention_caps_length() {
    let mut buf = SampleBuffer::new(Retention::Count(5)).unwrap();
    for t in 0..20 {
        buf.append(s(t as f64)).unwrap();
        assert_eq!(buf.len(), (t + 1).min(5));
    }
}

#[test]
fn count_retention_drops_oldest_first() {
    // capacity 3, appends at t=1..4 -> t=2,3,4 remain in order
    let mut buf = SampleBuffer::new(Retention::Count(3)).unwrap();
    for t in [1.0, 2.0, 3.0, 4.0] {
        buf.append(s(t)).unwrap();
    }
    assert_eq!(timestamps(&buf.window(None).unwrap()), vec![2.0, 3.0, 4.0]);
}

#[test]
fn span_retention_is_inclusive_at_the_boundary() {
    // span 10, appends at t=0,5,9,15: after t=15 the sample at t=0 falls off
    // (15s old) but t=5 stays (exactly 10s old).
    let mut buf = SampleBuffer::new(Retention::Span(10.0)).unwrap();
    for t in [0.0, 5.0, 9.0, 15.0] {
        buf.append(s(t)).unwrap();
    }
    assert_eq!(timestamps(&buf.window(None).unwrap()), vec![5.0, 9.0, 15.0]);
}

#[test]
fn span_invariant_holds_after_every_append() {
    let mut buf = SampleBuffer::new(Retention::Span(7.0)).unwrap();
    for t in [0.0, 1.0, 3.5, 8.0, 8.0, 12.25, 30.0] {
        buf.append(s(t)).unwrap();
        let win = buf.window(None).unwrap();
        let oldest = win.first().unwrap().timestamp;
        let newest = win.last().unwrap().timestamp;
        assert!(newest - oldest <= 7.0);
    }
}

#[test]
fn out_of_order_sample_is_rejected_and_buffer_unchanged() {
    let mut buf = SampleBuffer::new(Retention::Count(10)).unwrap();
    buf.append(s(1.0)).unwrap();
    buf.append(s(2.0)).unwrap();
    let before = buf.window(None).unwrap();

    let err = buf.append(s(1.5)).unwrap_err();
    assert_eq!(
        err,
        BufferError::OutOfOrderSample {
            last: 2.0,
            got: 1.5
        }
    );
    assert_eq!(buf.window(None).unwrap(), before);
}

#[test]
fn equal_timestamps_are_accepted() {
    let mut buf = SampleBuffer::new(Retention::Count(10)).unwrap();
    buf.append(s(3.0)).unwrap();
    buf.append(s(3.0)).unwrap();
    assert_eq!(buf.len(), 2);
}

#[test]
fn window_returns_most_recent_in_time_order() {
    let mut buf = SampleBuffer::new(Retention::Count(100)).unwrap();
    for t in 0..10 {
        buf.append(s(t as f64)).unwrap();
    }
    assert_eq!(
        timestamps(&buf.window(Some(3)).unwrap()),
        vec![7.0, 8.0, 9.0]
    );
    // larger than length -> everything
    assert_eq!(buf.window(Some(500)).unwrap().len(), 10);
    assert_eq!(buf.window(None).unwrap().len(), 10);
}

#[test]
fn window_of_zero_is_an_error() {
    let buf = SampleBuffer::new(Retention::Count(4)).unwrap();
    assert_eq!(buf.window(Some(0)), Err(BufferError::InvalidWindowSize));
}

#[test]
fn window_on_empty_buffer_is_empty() {
    let buf = SampleBuffer::new(Retention::Count(4)).unwrap();
    assert!(buf.window(None).unwrap().is_empty());
    assert!(buf.window(Some(3)).unwrap().is_empty());
}

#[test]
fn set_retention_evicts_immediately_in_count_mode() {
    let mut buf = SampleBuffer::new(Retention::Count(10)).unwrap();
    for t in 0..10 {
        buf.append(s(t as f64)).unwrap();
    }
    buf.set_retention(Retention::Count(4)).unwrap();
    // no append needed: the shrink applies now
    assert_eq!(
        timestamps(&buf.window(None).unwrap()),
        vec![6.0, 7.0, 8.0, 9.0]
    );
}

#[test]
fn set_retention_evicts_immediately_in_span_mode() {
    let mut buf = SampleBuffer::new(Retention::Count(10)).unwrap();
    for t in [0.0, 2.0, 4.0, 6.0, 8.0] {
        buf.append(s(t)).unwrap();
    }
    buf.set_retention(Retention::Span(4.0)).unwrap();
    assert_eq!(timestamps(&buf.window(None).unwrap()), vec![4.0, 6.0, 8.0]);
    assert_eq!(buf.retention(), Retention::Span(4.0));
}

#[test]
fn invalid_retention_values_are_rejected() {
    assert!(SampleBuffer::new(Retention::Count(0)).is_err());
    assert!(SampleBuffer::new(Retention::Span(0.0)).is_err());
    assert!(SampleBuffer::new(Retention::Span(-5.0)).is_err());
    assert!(SampleBuffer::new(Retention::Span(f64::NAN)).is_err());

    let mut buf = SampleBuffer::new(Retention::Count(3)).unwrap();
    buf.append(s(1.0)).unwrap();
    let err = buf.set_retention(Retention::Span(-1.0)).unwrap_err();
    assert_eq!(err, BufferError::InvalidRetentionValue);
    // failed reconfiguration leaves policy and contents alone
    assert_eq!(buf.retention(), Retention::Count(3));
    assert_eq!(buf.len(), 1);
}

#[test]
fn clear_empties_and_is_idempotent() {
    let mut buf = SampleBuffer::new(Retention::Count(3)).unwrap();
    for t in 0..3 {
        buf.append(s(t as f64)).unwrap();
    }
    buf.clear();
    assert!(buf.is_empty());
    assert!(buf.window(None).unwrap().is_empty());
    buf.clear();
    assert!(buf.is_empty());

    // appending after clear starts a fresh ordering epoch
    buf.append(s(0.5)).unwrap();
    assert_eq!(buf.len(), 1);
}

#[test]
fn latest_tracks_the_newest_sample() {
    let mut buf = SampleBuffer::new(Retention::Count(2)).unwrap();
    assert!(buf.latest().is_none());
    buf.append(s(1.0)).unwrap();
    buf.append(s(2.0)).unwrap();
    buf.append(s(3.0)).unwrap();
    assert_eq!(buf.latest().map(|s| s.timestamp), Some(3.0));
}
