//! Animated statistic counters.
//!
//! A counter element carries its target in an attribute. The first time it
//! becomes sufficiently visible it is latched with the `counted` class and
//! counts up from zero in fixed increments, one per timer tick.

use std::fmt;

use crate::dom::Element;

/// Class latching a counter once it has started.
pub const COUNTED_CLASS: &str = "counted";

/// Default number of increments from zero to the target.
pub const DEFAULT_STEPS: u32 = 120;

/// A counter's target value as read from markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTarget {
    /// A base-10 integer.
    Valid(i64),
    /// Missing or non-numeric attribute. Displays as `NaN`.
    Invalid,
}

impl CounterTarget {
    /// Parse an attribute value with `parseInt(value, 10)` semantics:
    /// leading whitespace and an optional sign are accepted, then the
    /// longest run of decimal digits; trailing garbage is ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Invalid;
        };

        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = unsigned
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Self::Invalid;
        }

        let magnitude = unsigned[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
        Self::Valid(if negative { -magnitude } else { magnitude })
    }
}

impl fmt::Display for CounterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterTarget::Valid(value) => write!(f, "{value}"),
            CounterTarget::Invalid => f.write_str("NaN"),
        }
    }
}

/// One rendered counter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    /// Text to display.
    pub text: String,

    /// Whether this is the last frame.
    pub finished: bool,
}

/// Pure counting state, independent of any element.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: CounterTarget,
    current: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Count to `target` in `steps` increments of `target / steps`.
    pub fn new(target: CounterTarget, steps: u32) -> Self {
        let increment = match target {
            CounterTarget::Valid(value) => value as f64 / f64::from(steps.max(1)),
            CounterTarget::Invalid => f64::NAN,
        };

        Self {
            target,
            current: 0.0,
            increment,
            finished: false,
        }
    }

    pub fn target(&self) -> CounterTarget {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Returns `None` once the animation has finished.
    ///
    /// Intermediate frames show the running total rounded down; the frame
    /// that reaches or passes the target shows the target exactly.
    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }

        let CounterTarget::Valid(target) = self.target else {
            self.finished = true;
            return Some(CounterFrame {
                text: self.target.to_string(),
                finished: true,
            });
        };

        self.current += self.increment;
        if self.current >= target as f64 {
            self.finished = true;
            Some(CounterFrame {
                text: target.to_string(),
                finished: true,
            })
        } else {
            Some(CounterFrame {
                text: format_floor(self.current),
                finished: false,
            })
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}

fn format_floor(value: f64) -> String {
    let floored = value.floor();
    // -0.0 prints as "0" in the document.
    if floored == 0.0 {
        "0".to_string()
    } else {
        format!("{floored}")
    }
}

/// A counter element awaiting visibility.
#[derive(Debug, Clone)]
pub struct StatCounter<E> {
    element: E,
    target_attribute: String,
    steps: u32,
}

impl<E: Element> StatCounter<E> {
    pub fn new(element: E) -> Self {
        Self {
            element,
            target_attribute: "data-target".to_string(),
            steps: DEFAULT_STEPS,
        }
    }

    /// Read the target from a different attribute.
    pub fn with_target_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.target_attribute = attribute.into();
        self
    }

    /// Override the number of increments.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn is_counted(&self) -> bool {
        self.element.has_class(COUNTED_CLASS)
    }

    /// The element became visible enough. Starts a run the first time only;
    /// the target is read from markup at this point.
    pub fn on_visible(&self) -> Option<CounterRun<E>> {
        if self.is_counted() {
            return None;
        }

        let target = CounterTarget::parse(self.element.attribute(&self.target_attribute).as_deref());
        if target == CounterTarget::Invalid {
            log::warn!("counter target is not a number, showing NaN");
        }

        self.element.add_class(COUNTED_CLASS);
        Some(CounterRun {
            element: self.element.clone(),
            animation: CounterAnimation::new(target, self.steps),
        })
    }
}

/// A running counter bound to its element.
#[derive(Debug)]
pub struct CounterRun<E> {
    element: E,
    animation: CounterAnimation,
}

impl<E: Element> CounterRun<E> {
    /// Render the next frame. Returns `false` when the timer should stop.
    pub fn tick(&mut self) -> bool {
        match self.animation.tick() {
            Some(frame) => {
                self.element.set_text(&frame.text);
                !frame.finished
            }
            None => false,
        }
    }

    pub fn animation(&self) -> &CounterAnimation {
        &self.animation
    }
}
