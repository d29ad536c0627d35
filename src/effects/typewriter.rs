//! Typewriter effect for the hero role titles.
//!
//! [`Typewriter`] is the pure state machine: it types a title one character
//! at a time, pauses on the full title, deletes it one character at a time,
//! then moves on to the next title, forever. [`TypewriterCycler`] drives it on
//! the tokio clock and publishes each [`Frame`] on a watch channel.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::Stream;

/// Delays between typewriter steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay before each typed character.
    pub type_interval_ms: u64,
    /// Delay before each deleted character.
    pub delete_interval_ms: u64,
    /// How long the full title stays on screen.
    pub pause_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval_ms: 100,
            delete_interval_ms: 50,
            pause_ms: 1500,
        }
    }
}

/// Where the typewriter is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
}

/// What the hero shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub text: String,
    /// Index of the title being typed or deleted.
    pub index: usize,
    pub phase: Phase,
}

/// The typewriter state machine.
///
/// Starts in [`Phase::Typing`] on title 0 with nothing shown. Each call to
/// [`advance`](Self::advance) is one timer expiry; [`next_delay`](Self::next_delay)
/// says how long to wait before it.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<Vec<char>>,
    timing: TypewriterTiming,
    index: usize,
    /// Number of characters of the current title on screen.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there are no titles to cycle.
    pub fn new<I, T>(titles: I, timing: TypewriterTiming) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let titles: Vec<Vec<char>> = titles
            .into_iter()
            .map(|t| t.as_ref().chars().collect())
            .collect();
        if titles.is_empty() {
            return None;
        }
        Some(Self {
            titles,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text(&self) -> String {
        self.titles[self.index][..self.shown].iter().collect()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.text(),
            index: self.index,
            phase: self.phase,
        }
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn next_delay(&self) -> Duration {
        let ms = match self.phase {
            Phase::Typing => self.timing.type_interval_ms,
            Phase::PausedFull => self.timing.pause_ms,
            Phase::Deleting => self.timing.delete_interval_ms,
        };
        Duration::from_millis(ms)
    }

    /// Apply one timer expiry and return the resulting frame.
    pub fn advance(&mut self) -> Frame {
        let len = self.titles[self.index].len();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = Phase::PausedFull;
                }
            }
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.titles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.frame()
    }
}

/// Runs a [`Typewriter`] on the tokio clock.
pub struct TypewriterCycler;

impl TypewriterCycler {
    /// Spawn the cycle on the current tokio runtime.
    ///
    /// The task sleeps for the typewriter's next delay, advances it, publishes
    /// the frame, and repeats, so at most one timer is pending at a time. It
    /// runs until the returned handle is stopped or dropped.
    pub fn start(typewriter: Typewriter) -> TypewriterHandle {
        let (tx, rx) = watch::channel(typewriter.frame());
        let task = tokio::spawn(async move {
            let mut typewriter = typewriter;
            loop {
                tokio::time::sleep(typewriter.next_delay()).await;
                let frame = typewriter.advance();
                if tx.send(frame).is_err() {
                    break;
                }
            }
        });
        TypewriterHandle { task, frames: rx }
    }
}

/// Owner of a running typewriter cycle.
///
/// Stopping or dropping the handle cancels the pending timer; no frame is
/// published afterwards.
#[derive(Debug)]
pub struct TypewriterHandle {
    task: JoinHandle<()>,
    frames: watch::Receiver<Frame>,
}

impl TypewriterHandle {
    /// The most recently published frame.
    pub fn current(&self) -> Frame {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stream frames, starting with the current one. The cycle stops when the
    /// stream is dropped.
    pub fn into_stream(self) -> FrameStream {
        FrameStream {
            frames: WatchStream::new(self.frames.clone()),
            _handle: self,
        }
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Stream of typewriter frames that owns its cycle.
pub struct FrameStream {
    frames: WatchStream<Frame>,
    _handle: TypewriterHandle,
}

impl Stream for FrameStream {
    type Item = Frame;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Frame>> {
        Pin::new(&mut self.frames).poll_next(cx)
    }
}
