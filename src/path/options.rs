use std::{
    any::Any,
    cell::RefCell,
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    animation::value::ValueTree,
    foundation::error::{DrawError, DrawResult},
};

/// Callback invoked once per frame, and once per `set`, with the interpolated values.
///
/// An error returned from a running animation's step fails that run.
type StepCallback = dyn FnMut(&ValueTree, Reference<'_>, Option<&Opaque>) -> anyhow::Result<()>;

/// Shared handle to a step callback.
#[derive(Clone)]
pub struct Step(Rc<RefCell<StepCallback>>);

impl Step {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut(&ValueTree, Reference<'_>, Option<&Opaque>) -> anyhow::Result<()> + 'static,
    {
        Self(Rc::new(RefCell::new(f)))
    }

    /// Fails instead of panicking when the callback re-enters its own handle.
    pub(crate) fn call(
        &self,
        values: &ValueTree,
        reference: Reference<'_>,
        attachment: Option<&Opaque>,
    ) -> anyhow::Result<()> {
        let mut f = self
            .0
            .try_borrow_mut()
            .map_err(|_| anyhow::anyhow!("step callback re-entered while running"))?;
        (*f)(values, reference, attachment)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Step(..)")
    }
}

/// Caller-owned value passed through to the step callback untouched.
#[derive(Clone)]
pub struct Opaque(Rc<dyn Any>);

impl Opaque {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(&self, other: &Opaque) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

/// Identity of a `PathController`, unique within the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControllerId(pub u64);

impl ControllerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Reference object handed to the step callback: the configured shape if any, otherwise the
/// controller that produced the frame.
#[derive(Clone, Copy, Debug)]
pub enum Reference<'a> {
    Shape(&'a Opaque),
    Controller(ControllerId),
}

impl<'a> Reference<'a> {
    pub(crate) fn resolve(shape: Option<&'a Opaque>, controller: ControllerId) -> Self {
        match shape {
            Some(shape) => Self::Shape(shape),
            None => Self::Controller(controller),
        }
    }
}

/// Instance defaults of a path controller.
///
/// The numeric and tree fields deserialize from JSON (camelCase keys, all optional); callbacks
/// and opaque values are set in code.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawOptions {
    /// Milliseconds before a run starts changing anything.
    pub delay: f64,
    /// Run length in milliseconds.
    pub duration: f64,
    /// Curve name or alias.
    pub easing: String,
    pub from: ValueTree,
    pub to: ValueTree,
    #[serde(skip)]
    pub step: Option<Step>,
    #[serde(skip)]
    pub shape: Option<Opaque>,
    #[serde(skip)]
    pub attachment: Option<Opaque>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 800.0,
            easing: "linear".to_string(),
            from: ValueTree::new(),
            to: ValueTree::new(),
            step: None,
            shape: None,
            attachment: None,
        }
    }
}

impl DrawOptions {
    pub fn from_json(s: &str) -> DrawResult<Self> {
        serde_json::from_str(s).map_err(|e| DrawError::serde(format!("invalid draw options: {e}")))
    }

    pub fn with_step<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ValueTree, Reference<'_>, Option<&Opaque>) -> anyhow::Result<()> + 'static,
    {
        self.step = Some(Step::new(f));
        self
    }
}

/// Per-call overrides for `PathController::animate`. Unset fields fall back to the instance
/// defaults.
#[derive(Clone, Debug, Default)]
pub struct AnimateOptions {
    pub delay: Option<f64>,
    pub duration: Option<f64>,
    pub easing: Option<String>,
    pub from: Option<ValueTree>,
    pub to: Option<ValueTree>,
    pub step: Option<Step>,
    pub shape: Option<Opaque>,
    pub attachment: Option<Opaque>,
}

impl AnimateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay = Some(ms);
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration = Some(ms);
        self
    }

    pub fn easing(mut self, name: impl Into<String>) -> Self {
        self.easing = Some(name.into());
        self
    }

    pub fn from(mut self, values: ValueTree) -> Self {
        self.from = Some(values);
        self
    }

    pub fn to(mut self, values: ValueTree) -> Self {
        self.to = Some(values);
        self
    }

    pub fn step<F>(mut self, f: F) -> Self
    where
        F: FnMut(&ValueTree, Reference<'_>, Option<&Opaque>) -> anyhow::Result<()> + 'static,
    {
        self.step = Some(Step::new(f));
        self
    }

    pub fn shape(mut self, shape: Opaque) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn attachment(mut self, attachment: Opaque) -> Self {
        self.attachment = Some(attachment);
        self
    }

    /// The `(from, to)` pair when both were given; such trees are used verbatim.
    pub(crate) fn explicit_values(&self) -> Option<(ValueTree, ValueTree)> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Some((from.clone(), to.clone())),
            _ => None,
        }
    }

    /// Shallow merge over `defaults`; fields set here win.
    pub(crate) fn merged_over(self, defaults: &DrawOptions) -> DrawOptions {
        DrawOptions {
            delay: self.delay.unwrap_or(defaults.delay),
            duration: self.duration.unwrap_or(defaults.duration),
            easing: self.easing.unwrap_or_else(|| defaults.easing.clone()),
            from: self.from.unwrap_or_else(|| defaults.from.clone()),
            to: self.to.unwrap_or_else(|| defaults.to.clone()),
            step: self.step.or_else(|| defaults.step.clone()),
            shape: self.shape.or_else(|| defaults.shape.clone()),
            attachment: self.attachment.or_else(|| defaults.attachment.clone()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/options.rs"]
mod tests;
