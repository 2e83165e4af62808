//! Bounded, time-ordered sample history backing the trend charts.

use std::collections::VecDeque;

use thiserror::Error;

use crate::sample::Sample;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BufferError {
    #[error("sample at t={got}s is behind the newest recorded sample at t={last}s")]
    OutOfOrderSample { last: f64, got: f64 },
    #[error("display window must be at least one sample")]
    InvalidWindowSize,
    #[error("retention must keep at least one sample or a positive time span")]
    InvalidRetentionValue,
}

/// Eviction policy bounding the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Retention {
    /// Keep at most this many samples.
    Count(usize),
    /// Keep samples within this many seconds of the newest one (inclusive:
    /// a sample exactly `span` seconds old stays).
    Span(f64),
}

impl Retention {
    fn validate(self) -> Result<(), BufferError> {
        let ok = match self {
            Retention::Count(n) => n > 0,
            Retention::Span(secs) => secs.is_finite() && secs > 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(BufferError::InvalidRetentionValue)
        }
    }
}

/// Rolling history of readings for one zone. Append-only; old samples fall
/// off the front whenever the retention policy says so.
#[derive(Debug)]
pub struct SampleBuffer {
    samples: VecDeque<Sample>,
    retention: Retention,
}

impl SampleBuffer {
    pub fn new(retention: Retention) -> Result<Self, BufferError> {
        retention.validate()?;
        Ok(Self {
            samples: VecDeque::new(),
            retention,
        })
    }

    /// Record a reading. Timestamps must be monotonic; a sample older than
    /// the newest recorded one is rejected and the buffer is left unchanged.
    /// Equal timestamps are accepted.
    pub fn append(&mut self, sample: Sample) -> Result<(), BufferError> {
        if let Some(last) = self.samples.back() {
            // `>=` written as a negated comparison so a NaN timestamp is
            // rejected rather than silently breaking the ordering invariant.
            if !(sample.timestamp >= last.timestamp) {
                return Err(BufferError::OutOfOrderSample {
                    last: last.timestamp,
                    got: sample.timestamp,
                });
            }
        }
        self.samples.push_back(sample);
        self.evict();
        Ok(())
    }

    /// The most recent `n` samples in time order (all of them when `n` is
    /// `None` or exceeds the current length). Read-only; never mutates.
    pub fn window(&self, n: Option<usize>) -> Result<Vec<Sample>, BufferError> {
        let take = match n {
            Some(0) => return Err(BufferError::InvalidWindowSize),
            Some(n) => n.min(self.samples.len()),
            None => self.samples.len(),
        };
        let start = self.samples.len() - take;
        Ok(self.samples.iter().skip(start).copied().collect())
    }

    /// Switch the eviction policy. Takes effect immediately: if the new
    /// policy is tighter than the current contents, samples are evicted now
    /// rather than on the next append.
    pub fn set_retention(&mut self, retention: Retention) -> Result<(), BufferError> {
        retention.validate()?;
        self.retention = retention;
        self.evict();
        Ok(())
    }

    pub fn retention(&self) -> Retention {
        self.retention
    }

    /// Empty the buffer. Idempotent; the retention policy is kept.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    fn evict(&mut self) {
        match self.retention {
            Retention::Count(cap) => {
                while self.samples.len() > cap {
                    self.samples.pop_front();
                }
            }
            Retention::Span(secs) => {
                let Some(newest) = self.samples.back().map(|s| s.timestamp) else {
                    return;
                };
                while let Some(oldest) = self.samples.front() {
                    if newest - oldest.timestamp <= secs {
                        break;
                    }
                    self.samples.pop_front();
                }
            }
        }
    }
}
